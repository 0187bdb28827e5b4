use serde::{Deserialize, Serialize};

use tradepost_core::{DomainError, DomainResult};

/// Product identifier (natural key from the catalog schema).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Product.
///
/// Carries two counters with distinct lifecycles:
/// - `units_in_stock`: physical stock, decremented at shipment only.
/// - `units_committed`: cumulative units reserved by open order-lines,
///   incremented at append, released at shipment.
///
/// Appending an order-line never touches `units_in_stock`; stock is only
/// depleted when the order ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    units_in_stock: u32,
    units_committed: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: u64, units_in_stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            units_in_stock,
            units_committed: 0,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn units_in_stock(&self) -> u32 {
        self.units_in_stock
    }

    pub fn units_committed(&self) -> u32 {
        self.units_committed
    }

    /// Reserve `quantity` units for a new order-line.
    ///
    /// The committed counter must never grow beyond the stock available at
    /// the time of the append, so the stock-sufficiency check and the
    /// increment are a single operation.
    pub fn commit_units(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.units_in_stock {
            return Err(DomainError::invalid_state("insufficient stock"));
        }
        self.units_committed += quantity;
        Ok(())
    }

    /// Record the shipment of `quantity` units: stock is depleted and the
    /// matching reservation is released.
    ///
    /// Saturating: counters never go below zero even if an order over-committed
    /// through a path that bypassed `commit_units`.
    pub fn ship_units(&mut self, quantity: u32) {
        self.units_in_stock = self.units_in_stock.saturating_sub(quantity);
        self.units_committed = self.units_committed.saturating_sub(quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(stock: u32) -> Product {
        Product::new(ProductId::new(95), "Steel widget", 250, stock)
    }

    #[test]
    fn new_product_has_no_committed_units() {
        let product = test_product(40);
        assert_eq!(product.units_committed(), 0);
        assert_eq!(product.units_in_stock(), 40);
    }

    #[test]
    fn commit_units_increments_committed_and_leaves_stock_alone() {
        let mut product = test_product(40);
        product.commit_units(15).unwrap();
        assert_eq!(product.units_committed(), 15);
        assert_eq!(product.units_in_stock(), 40);
    }

    #[test]
    fn commit_units_rejects_quantities_beyond_stock() {
        let mut product = test_product(10);
        let err = product.commit_units(15).unwrap_err();
        assert_eq!(err, DomainError::invalid_state("insufficient stock"));
        assert_eq!(product.units_committed(), 0);
        assert_eq!(product.units_in_stock(), 10);
    }

    #[test]
    fn commit_units_allows_exactly_the_available_stock() {
        let mut product = test_product(15);
        product.commit_units(15).unwrap();
        assert_eq!(product.units_committed(), 15);
    }

    #[test]
    fn ship_units_depletes_stock_and_releases_reservation() {
        let mut product = test_product(120);
        product.commit_units(20).unwrap();
        product.ship_units(20);
        assert_eq!(product.units_in_stock(), 100);
        assert_eq!(product.units_committed(), 0);
    }

    #[test]
    fn ship_units_saturates_at_zero() {
        let mut product = test_product(5);
        product.ship_units(20);
        assert_eq!(product.units_in_stock(), 0);
        assert_eq!(product.units_committed(), 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a successful commit increases the committed counter
            /// by exactly the requested quantity and never touches stock.
            #[test]
            fn commit_within_stock_adds_exactly_quantity(
                stock in 0u32..100_000,
                quantity in 0u32..100_000,
            ) {
                prop_assume!(quantity <= stock);
                let mut product = test_product(stock);
                let before = product.units_committed();
                product.commit_units(quantity).unwrap();
                prop_assert_eq!(product.units_committed(), before + quantity);
                prop_assert_eq!(product.units_in_stock(), stock);
            }

            /// Property: a rejected commit leaves the product untouched.
            #[test]
            fn commit_beyond_stock_changes_nothing(
                stock in 0u32..100_000,
                excess in 1u32..100_000,
            ) {
                let mut product = test_product(stock);
                let snapshot = product.clone();
                let result = product.commit_units(stock + excess);
                prop_assert!(result.is_err());
                prop_assert_eq!(product, snapshot);
            }

            /// Property: shipping never underflows either counter.
            #[test]
            fn ship_never_underflows(
                stock in 0u32..100_000,
                committed in 0u32..100_000,
                shipped in 0u32..200_000,
            ) {
                prop_assume!(committed <= stock);
                let mut product = test_product(stock);
                if committed > 0 {
                    product.commit_units(committed).unwrap();
                }
                product.ship_units(shipped);
                prop_assert_eq!(product.units_in_stock(), stock.saturating_sub(shipped));
                prop_assert_eq!(product.units_committed(), committed.saturating_sub(shipped));
            }
        }
    }
}
