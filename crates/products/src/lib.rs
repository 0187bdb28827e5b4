//! Products domain module.
//!
//! This crate contains business rules for products and their stock counters,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductId};
