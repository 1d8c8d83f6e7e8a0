use super::ListingRecord;
use sqlx::{Row, postgres::PgRow};

/// `product_id` is not checked against `products` here.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub total: f64,
}

impl ListingRecord for Order {
    const RESOURCE: &'static str = "orders";
    const QUERY: &'static str = "SELECT id::int8 AS id, product_id::int8 AS product_id, \
         quantity::int8 AS quantity, total::float8 AS total FROM orders";
    const COLUMNS: &'static [&'static str] = &["id", "product_id", "quantity", "total"];

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            product_id: row.try_get(1)?,
            quantity: row.try_get(2)?,
            total: row.try_get(3)?,
        })
    }
}
