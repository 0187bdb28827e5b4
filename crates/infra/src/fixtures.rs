//! Reference dataset for tests and development.
//!
//! Mirrors the acceptance scenarios: one open order, one shipped order, and a
//! catalog spanning well-stocked, low-stock, and out-of-stock products. The
//! open order carries one pre-existing line (product 98, quantity 20) so the
//! shipment path has something to deplete.

use chrono::Utc;

use tradepost_orders::{CustomerId, NewOrderLine, Order, OrderId};
use tradepost_products::{Product, ProductId};

use crate::store::{LineStore, OrderStore, ProductStore, StoreError};
use crate::InMemoryDatabase;

/// Order that is still open to new lines.
pub const OPEN_ORDER: OrderId = OrderId(99998);
/// Order that already shipped; immutable to further line additions.
pub const SHIPPED_ORDER: OrderId = OrderId(99999);

pub const AVAILABLE_PRODUCT_1: ProductId = ProductId(93);
pub const AVAILABLE_PRODUCT_2: ProductId = ProductId(94);
pub const AVAILABLE_PRODUCT_3: ProductId = ProductId(95);
pub const AVAILABLE_PRODUCT_4: ProductId = ProductId(96);
pub const OUT_OF_STOCK_PRODUCT: ProductId = ProductId(97);
/// Product referenced by the open order's pre-existing line.
pub const SHIPPING_PRODUCT: ProductId = ProductId(98);
/// Stocked below the quantities the stock-check scenarios request.
pub const LOW_STOCK_PRODUCT: ProductId = ProductId(99);

/// Quantity of the pre-existing line on [`OPEN_ORDER`].
pub const PRE_EXISTING_LINE_QUANTITY: u32 = 20;

/// Populate `db` with the reference dataset.
pub fn seed_reference_data(db: &InMemoryDatabase) -> Result<(), StoreError> {
    let products = [
        Product::new(AVAILABLE_PRODUCT_1, "Oak barrel", 4_500, 20),
        Product::new(AVAILABLE_PRODUCT_2, "Copper kettle", 7_900, 30),
        Product::new(AVAILABLE_PRODUCT_3, "Tin lantern", 1_250, 40),
        Product::new(AVAILABLE_PRODUCT_4, "Hemp rope coil", 600, 50),
        Product::new(OUT_OF_STOCK_PRODUCT, "Whale oil flask", 2_200, 0),
        Product::new(SHIPPING_PRODUCT, "Iron stove", 15_000, 120),
        Product::new(LOW_STOCK_PRODUCT, "Glass jar", 300, 10),
    ];
    for product in products {
        ProductStore::save(db, product)?;
    }

    OrderStore::save(db, Order::new(OPEN_ORDER, CustomerId::new("0COM")))?;
    LineStore::save(
        db,
        NewOrderLine {
            order_id: OPEN_ORDER,
            product_id: SHIPPING_PRODUCT,
            quantity: PRE_EXISTING_LINE_QUANTITY,
        },
    )?;

    let shipped = Order::rehydrate(SHIPPED_ORDER, CustomerId::new("2COM"), Some(Utc::now()));
    OrderStore::save(db, shipped)?;

    Ok(())
}
