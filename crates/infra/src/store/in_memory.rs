use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use tradepost_core::{DomainError, DomainResult};
use tradepost_orders::{LineId, NewOrderLine, Order, OrderId, OrderLine};
use tradepost_products::{Product, ProductId};

use super::{LineStore, OrderStore, ProductStore, StoreError};
use crate::tx::TransactionBoundary;

#[derive(Debug, Clone, Default)]
struct DbState {
    orders: HashMap<OrderId, Order>,
    products: HashMap<ProductId, Product>,
    lines: HashMap<LineId, OrderLine>,
}

/// In-memory relational-style database.
///
/// Intended for tests/dev. Implements all three store gateways plus the
/// transaction boundary over one shared state.
///
/// Transactions are serialized behind `tx_gate`, which makes every
/// read-then-write sequence inside a transaction atomic with respect to other
/// transactions (stronger than the row-lock minimum the appender needs).
/// Rollback is snapshot-based: the state is cloned on entry and restored if
/// the transaction closure fails.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    state: RwLock<DbState>,
    tx_gate: Mutex<()>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryDatabase {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.orders.get(&id).cloned())
    }

    fn save(&self, order: Order) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.orders.insert(order.id(), order);
        Ok(())
    }
}

impl ProductStore for InMemoryDatabase {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.products.get(&id).cloned())
    }

    fn save(&self, product: Product) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.products.insert(product.id(), product);
        Ok(())
    }
}

impl LineStore for InMemoryDatabase {
    fn save(&self, line: NewOrderLine) -> Result<OrderLine, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let line = line.into_line(LineId::new());
        state.lines.insert(line.id, line.clone());
        Ok(line)
    }

    fn list_by_order(&self, order_id: OrderId) -> Result<Vec<OrderLine>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut lines: Vec<OrderLine> = state
            .lines
            .values()
            .filter(|l| l.order_id == order_id)
            .cloned()
            .collect();
        // LineId is time-ordered, so this is insertion order.
        lines.sort_by_key(|l| l.id);
        Ok(lines)
    }
}

impl TransactionBoundary for InMemoryDatabase {
    fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        F: FnOnce() -> DomainResult<T>,
    {
        let _gate = self
            .tx_gate
            .lock()
            .map_err(|_| DomainError::infrastructure("transaction gate poisoned"))?;

        let snapshot = self
            .state
            .read()
            .map_err(|_| DomainError::from(StoreError::LockPoisoned))?
            .clone();

        match work() {
            Ok(value) => Ok(value),
            Err(err) => {
                let mut state = self
                    .state
                    .write()
                    .map_err(|_| DomainError::from(StoreError::LockPoisoned))?;
                *state = snapshot;
                Err(err)
            }
        }
    }
}
