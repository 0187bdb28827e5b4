//! Storage gateway abstractions for orders, products, and order-lines.

pub mod in_memory;

use std::sync::Arc;

use thiserror::Error;

use tradepost_core::DomainError;
use tradepost_orders::{NewOrderLine, Order, OrderId, OrderLine};
use tradepost_products::{Product, ProductId};

/// Storage-layer failure.
///
/// Kept separate from the domain error model; the seam into services converts
/// every storage failure into `DomainError::Infrastructure`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for DomainError {
    fn from(value: StoreError) -> Self {
        DomainError::infrastructure(value.to_string())
    }
}

/// Read/write gateway for orders.
pub trait OrderStore: Send + Sync {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
    fn save(&self, order: Order) -> Result<(), StoreError>;
}

/// Read/write gateway for products.
pub trait ProductStore: Send + Sync {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
    fn save(&self, product: Product) -> Result<(), StoreError>;
}

/// Write gateway for order-lines.
pub trait LineStore: Send + Sync {
    /// Persist a new line, generating its surrogate identity.
    fn save(&self, line: NewOrderLine) -> Result<OrderLine, StoreError>;
    /// All lines belonging to one order, in insertion order.
    fn list_by_order(&self, order_id: OrderId) -> Result<Vec<OrderLine>, StoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        (**self).find_by_id(id)
    }

    fn save(&self, order: Order) -> Result<(), StoreError> {
        (**self).save(order)
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: Product) -> Result<(), StoreError> {
        (**self).save(product)
    }
}

impl<S> LineStore for Arc<S>
where
    S: LineStore + ?Sized,
{
    fn save(&self, line: NewOrderLine) -> Result<OrderLine, StoreError> {
        (**self).save(line)
    }

    fn list_by_order(&self, order_id: OrderId) -> Result<Vec<OrderLine>, StoreError> {
        (**self).list_by_order(order_id)
    }
}
