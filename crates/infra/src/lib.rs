//! Infrastructure layer: storage gateways, the transaction boundary, and the
//! in-memory backend used for tests and development.

pub mod fixtures;
pub mod store;
pub mod tx;

pub use store::in_memory::InMemoryDatabase;
pub use store::{LineStore, OrderStore, ProductStore, StoreError};
pub use tx::TransactionBoundary;
