pub mod order;
pub mod product;

use sqlx::postgres::PgRow;

/// A row shape read by a fixed, parameterless listing query.
///
/// `COLUMNS` declares the positional layout `decode` reads; rows whose column
/// count differs are rejected before decoding.
pub trait ListingRecord: Sized + Send + Sync + 'static {
    const RESOURCE: &'static str;
    const QUERY: &'static str;
    const COLUMNS: &'static [&'static str];

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error>;
}
