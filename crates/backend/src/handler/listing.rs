use crate::abstract_trait::listing::DynListingService;
use axum::{Extension, Json};
use serde::Serialize;
use shared::errors::HttpError;

/// Materializes the whole listing before anything is written, so a failure
/// anywhere yields a 500 with no partial JSON.
pub async fn list_records<R>(
    Extension(service): Extension<DynListingService<R>>,
) -> Result<Json<Vec<R>>, HttpError>
where
    R: Serialize + Send + 'static,
{
    let records = service.find_all().await?;
    Ok(Json(records))
}
