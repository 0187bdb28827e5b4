//! Orders domain module.
//!
//! This crate contains business rules for orders and their lines, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;

pub use order::{CustomerId, LineId, NewOrderLine, Order, OrderId, OrderLine};
