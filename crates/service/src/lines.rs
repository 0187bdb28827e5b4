//! Appending an order-line to an existing order.

use std::sync::Arc;

use tradepost_core::{DomainError, DomainResult, EntityKind};
use tradepost_infra::{LineStore, OrderStore, ProductStore, TransactionBoundary};
use tradepost_orders::{NewOrderLine, OrderId, OrderLine};
use tradepost_products::ProductId;

/// Order-line appender.
///
/// `append_line` is the sole writer path for order-lines and for the
/// product's committed-quantity counter at order time.
pub struct LineService<X: TransactionBoundary> {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    lines: Arc<dyn LineStore>,
    tx: X,
}

impl<X: TransactionBoundary> LineService<X> {
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

    /// Append a line of `quantity` units of `product_id` to `order_id`.
    ///
    /// Preconditions, checked in order, each short-circuiting:
    /// 1. the order exists,
    /// 2. the product exists,
    /// 3. the quantity is strictly positive,
    /// 4. the order has not shipped,
    /// 5. the quantity does not exceed the product's stock.
    ///
    /// On success the new line and the product's incremented
    /// committed-quantity counter are persisted as one atomic transaction and
    /// the line is returned with its generated identity. Stock itself is not
    /// touched here; it is depleted at shipment.
    pub fn append_line(
        &self,
        order_id: OrderId,
        product_id: ProductId,
        quantity: u32,
    ) -> DomainResult<OrderLine> {
        self.tx.run(|| {
            let order = self
                .orders
                .find_by_id(order_id)?
                .ok_or(DomainError::not_found(EntityKind::Order))?;
            let mut product = self
                .products
                .find_by_id(product_id)?
                .ok_or(DomainError::not_found(EntityKind::Product))?;

            if quantity == 0 {
                return Err(DomainError::invalid_argument("quantity must be positive"));
            }
            order.ensure_open()?;

            // Stock check + committed increment, atomic within this transaction.
            product.commit_units(quantity)?;

            let line = self.lines.save(NewOrderLine {
                order_id,
                product_id,
                quantity,
            })?;
            self.products.save(product)?;

            tracing::debug!(%order_id, %product_id, quantity, line_id = %line.id, "order-line appended");
            Ok(line)
        })
    }
}
