//! Recording the shipment of an order.

use std::sync::Arc;

use chrono::Utc;

use tradepost_core::{DomainError, DomainResult, EntityKind};
use tradepost_infra::{LineStore, OrderStore, ProductStore, TransactionBoundary};
use tradepost_orders::{Order, OrderId};

/// Shipment registrar.
///
/// Shipping is the counterpart of the append operation: it is the only path
/// that depletes stock. Appends reserve units (committed-quantity); shipment
/// turns those reservations into actual stock depletion and finalizes the
/// order.
pub struct OrderService<X: TransactionBoundary> {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    lines: Arc<dyn LineStore>,
    tx: X,
}

impl<X: TransactionBoundary> OrderService<X> {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductStore>,
        lines: Arc<dyn LineStore>,
        tx: X,
    ) -> Self {
        Self {
            orders,
            products,
            lines,
            tx,
        }
    }

    /// Mark `order_id` as shipped now.
    ///
    /// Fails with `NotFound` if the order is unknown and with `InvalidState`
    /// if it already shipped. On success every line's product has its stock
    /// and committed-quantity decremented by the line quantity, and the order
    /// with its shipped-at timestamp is persisted, all in one transaction.
    pub fn register_shipment(&self, order_id: OrderId) -> DomainResult<Order> {
        self.tx.run(|| {
            let mut order = self
                .orders
                .find_by_id(order_id)?
                .ok_or(DomainError::not_found(EntityKind::Order))?;
            order.mark_shipped(Utc::now())?;

            for line in self.lines.list_by_order(order_id)? {
                let mut product = self
                    .products
                    .find_by_id(line.product_id)?
                    .ok_or(DomainError::not_found(EntityKind::Product))?;
                product.ship_units(line.quantity);
                self.products.save(product)?;
            }

            self.orders.save(order.clone())?;

            tracing::info!(%order_id, "order shipped");
            Ok(order)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineService;
    use tradepost_infra::fixtures::{
        self, OPEN_ORDER, PRE_EXISTING_LINE_QUANTITY, SHIPPED_ORDER, SHIPPING_PRODUCT,
    };
    use tradepost_infra::InMemoryDatabase;
    use tradepost_products::ProductId;

    fn setup() -> (Arc<InMemoryDatabase>, OrderService<Arc<InMemoryDatabase>>) {
        tradepost_observability::init();
        let db = Arc::new(InMemoryDatabase::new());
        fixtures::seed_reference_data(&db).unwrap();
        let service = OrderService::new(db.clone(), db.clone(), db.clone(), db.clone());
        (db, service)
    }

    fn product(db: &Arc<InMemoryDatabase>, id: ProductId) -> tradepost_products::Product {
        ProductStore::find_by_id(db, id).unwrap().unwrap()
    }

    #[test]
    fn shipment_sets_the_timestamp_and_depletes_stock_per_line() {
        let (db, service) = setup();
        let stock_before = product(&db, SHIPPING_PRODUCT).units_in_stock();

        let order = service.register_shipment(OPEN_ORDER).unwrap();
        assert!(order.is_shipped());

        let stored = OrderStore::find_by_id(&db, OPEN_ORDER).unwrap().unwrap();
        assert_eq!(stored.shipped_at(), order.shipped_at());

        let shipped_product = product(&db, SHIPPING_PRODUCT);
        assert_eq!(
            shipped_product.units_in_stock(),
            stock_before - PRE_EXISTING_LINE_QUANTITY
        );
    }

    #[test]
    fn shipment_releases_committed_units() {
        let (db, service) = setup();
        // Give the shipping product a live reservation first.
        let lines = LineService::new(db.clone(), db.clone(), db.clone(), db.clone());
        lines.append_line(OPEN_ORDER, SHIPPING_PRODUCT, 5).unwrap();
        assert_eq!(product(&db, SHIPPING_PRODUCT).units_committed(), 5);

        service.register_shipment(OPEN_ORDER).unwrap();

        let shipped = product(&db, SHIPPING_PRODUCT);
        assert_eq!(shipped.units_committed(), 0);
        // Both the pre-existing line and the fresh one deplete stock.
        assert_eq!(
            shipped.units_in_stock(),
            120 - PRE_EXISTING_LINE_QUANTITY - 5
        );
    }

    #[test]
    fn already_shipped_order_is_rejected() {
        let (_db, service) = setup();

        let err = service.register_shipment(SHIPPED_ORDER).unwrap_err();
        assert_eq!(err, DomainError::invalid_state("order already shipped"));
    }

    #[test]
    fn unknown_order_fails_with_not_found() {
        let (_db, service) = setup();

        let err = service.register_shipment(OrderId::new(12345)).unwrap_err();
        assert_eq!(err, DomainError::not_found(EntityKind::Order));
    }

    #[test]
    fn rejected_shipment_leaves_stock_untouched() {
        let (db, service) = setup();
        let before = product(&db, SHIPPING_PRODUCT).units_in_stock();

        service.register_shipment(SHIPPED_ORDER).unwrap_err();

        assert_eq!(product(&db, SHIPPING_PRODUCT).units_in_stock(), before);
    }
}
