use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Catalog entry as seen at order-creation time. `quantity` is the stock
/// available right now; orders snapshot `price` so later catalog updates do
/// not rewrite past orders.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}
