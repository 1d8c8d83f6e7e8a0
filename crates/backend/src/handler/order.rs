use crate::{
    config::RouterConfig, domain::response::order::OrderResponse,
    handler::listing::list_records, state::AppState,
};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;

pub fn order_routes(app_state: Arc<AppState>, config: &RouterConfig) -> Router {
    Router::new()
        .route(&config.route("/orders"), get(list_records::<OrderResponse>))
        .layer(Extension(app_state.di_container.order_query.clone()))
}
