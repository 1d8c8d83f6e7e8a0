use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynListingRepository<M> = Arc<dyn ListingRepositoryTrait<M> + Send + Sync>;

#[async_trait]
pub trait ListingRepositoryTrait<M> {
    /// Every row of the listing, fully materialized, in the order the database returned them.
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError>;
}
