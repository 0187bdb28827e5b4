use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_core::{DomainError, DomainResult};
use tradepost_products::ProductId;

/// Order identifier (natural key from the sales schema).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer identifier (short alphanumeric code, e.g. "0COM").
///
/// Customers are part of the surrounding relational schema; no customer
/// aggregate lives in this workspace, orders just carry the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generated surrogate key of a persisted order-line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). The line store calls this when a line is
    /// saved; domain code never assigns line identities itself.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for LineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Order.
///
/// The lifecycle is two-state: open, then shipped. Once `shipped_at` is set
/// the order is immutable to further line additions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    shipped_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create an open (not yet shipped) order.
    pub fn new(id: OrderId, customer_id: CustomerId) -> Self {
        Self {
            id,
            customer_id,
            shipped_at: None,
        }
    }

    /// Reconstruct an order from stored state, whatever its lifecycle stage.
    ///
    /// This is the path stores use to materialize rows; `new` is for orders
    /// entering the system.
    pub fn rehydrate(
        id: OrderId,
        customer_id: CustomerId,
        shipped_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            customer_id,
            shipped_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn shipped_at(&self) -> Option<DateTime<Utc>> {
        self.shipped_at
    }

    pub fn is_shipped(&self) -> bool {
        self.shipped_at.is_some()
    }

    /// Guard used by every mutating operation on the order's lines.
    pub fn ensure_open(&self) -> DomainResult<()> {
        if self.is_shipped() {
            return Err(DomainError::invalid_state("order already shipped"));
        }
        Ok(())
    }

    /// Transition open → shipped. Fails if the order has already shipped.
    pub fn mark_shipped(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_open()?;
        self.shipped_at = Some(at);
        Ok(())
    }
}

/// Order line: one product/quantity entry belonging to one order.
///
/// Lines are created through the append operation only and never mutated
/// afterwards; deletion happens only by cascade with the parent order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A line that has not been persisted yet: everything but the generated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl NewOrderLine {
    /// Attach the store-generated identity, producing the persisted form.
    pub fn into_line(self, id: LineId) -> OrderLine {
        OrderLine {
            id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
