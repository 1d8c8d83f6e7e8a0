use crate::{
    abstract_trait::listing::{DynListingRepository, ListingServiceTrait},
    model::ListingRecord,
};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    utils::{Metrics, Status},
};
use std::marker::PhantomData;
use tokio::time::Instant;
use tracing::{error, info};

/// Lists every `M` from the repository and converts each into the wire shape `R`.
pub struct ListingService<M, R> {
    repository: DynListingRepository<M>,
    metrics: Metrics,
    _response: PhantomData<fn() -> R>,
}

impl<M, R> Clone for ListingService<M, R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            metrics: self.metrics.clone(),
            _response: PhantomData,
        }
    }
}

impl<M, R> ListingService<M, R>
where
    M: ListingRecord,
    R: From<M> + Send + 'static,
{
    pub fn new(repository: DynListingRepository<M>, metrics: Metrics) -> Self {
        Self {
            repository,
            metrics,
            _response: PhantomData,
        }
    }
}

#[async_trait]
impl<M, R> ListingServiceTrait<R> for ListingService<M, R>
where
    M: ListingRecord,
    R: From<M> + Send + 'static,
{
    async fn find_all(&self) -> Result<Vec<R>, ServiceError> {
        let start_time = Instant::now();
        info!("Starting operation: list {}", M::RESOURCE);

        match self.repository.find_all().await {
            Ok(models) => {
                let records: Vec<R> = models.into_iter().map(R::from).collect();
                let elapsed = start_time.elapsed().as_secs_f64();

                info!(
                    "✅ Listed {} {} in {:.3}s",
                    records.len(),
                    M::RESOURCE,
                    elapsed
                );
                self.metrics.record(M::RESOURCE, Status::Success, elapsed);

                Ok(records)
            }
            Err(e) => {
                let elapsed = start_time.elapsed().as_secs_f64();

                error!("❌ Failed to list {}: {}", M::RESOURCE, e);
                self.metrics.record(M::RESOURCE, Status::Error, elapsed);

                Err(ServiceError::Repo(e))
            }
        }
    }
}
