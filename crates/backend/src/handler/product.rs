use crate::{
    config::RouterConfig, domain::response::product::ProductResponse,
    handler::listing::list_records, state::AppState,
};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;

pub fn product_routes(app_state: Arc<AppState>, config: &RouterConfig) -> Router {
    Router::new()
        .route(
            &config.route("/products"),
            get(list_records::<ProductResponse>),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
}
