use crate::{abstract_trait::listing::ListingRepositoryTrait, model::ListingRecord};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::Row;
use std::marker::PhantomData;
use tracing::{error, info};

/// Runs `M::QUERY` against the pool and decodes every row into `M`.
pub struct ListingRepository<M> {
    db: ConnectionPool,
    _record: PhantomData<fn() -> M>,
}

impl<M> Clone for ListingRepository<M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _record: PhantomData,
        }
    }
}

impl<M: ListingRecord> ListingRepository<M> {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

pub fn check_columns<M: ListingRecord>(actual: usize) -> Result<(), RepositoryError> {
    let expected = M::COLUMNS.len();
    if actual != expected {
        return Err(RepositoryError::Decode(format!(
            "{}: expected {} columns ({}), got {}",
            M::RESOURCE,
            expected,
            M::COLUMNS.join(", "),
            actual
        )));
    }
    Ok(())
}

#[async_trait]
impl<M: ListingRecord> ListingRepositoryTrait<M> for ListingRepository<M> {
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        info!("🔍 Fetching all {}", M::RESOURCE);

        // fetch_all drains the cursor and hands the connection back before decoding starts
        let rows = sqlx::query(M::QUERY)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch {}: {:?}", M::RESOURCE, e);
                RepositoryError::from(e)
            })?;

        let mut records = Vec::with_capacity(rows.len());

        for row in &rows {
            check_columns::<M>(row.len())?;

            let record = M::decode(row).map_err(|e| {
                error!("❌ Failed to decode {} row: {:?}", M::RESOURCE, e);
                RepositoryError::Decode(e.to_string())
            })?;

            records.push(record);
        }

        Ok(records)
    }
}
