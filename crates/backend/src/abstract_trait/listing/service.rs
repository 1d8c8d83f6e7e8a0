use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynListingService<R> = Arc<dyn ListingServiceTrait<R> + Send + Sync>;

#[async_trait]
pub trait ListingServiceTrait<R> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError>;
}
