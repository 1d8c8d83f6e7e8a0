use super::ListingRecord;
use sqlx::{Row, postgres::PgRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl ListingRecord for Product {
    const RESOURCE: &'static str = "products";
    const QUERY: &'static str =
        "SELECT id::int8 AS id, name, price::float8 AS price FROM products";
    const COLUMNS: &'static [&'static str] = &["id", "name", "price"];

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            price: row.try_get(2)?,
        })
    }
}
