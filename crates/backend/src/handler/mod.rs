mod listing;
mod order;
mod product;

use crate::{config::RouterConfig, middleware::cors::cors_middleware, state::AppState};
use anyhow::Result;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use self::listing::list_records;
pub use self::order::order_routes;
pub use self::product::product_routes;

const REQUEST_BODY_LIMIT: usize = 64 * 1024;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState, config: &RouterConfig) -> Router {
        let shared_state = Arc::new(app_state);

        let router = Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state.clone(), config))
            .merge(order_routes(shared_state, config))
            .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT))
            .layer(TraceLayer::new_for_http());

        if config.cors_enabled {
            router.layer(middleware::from_fn(cors_middleware))
        } else {
            router
        }
    }

    pub async fn serve(port: u16, app_state: AppState, config: &RouterConfig) -> Result<()> {
        let app = Self::build(app_state, config);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Backend running on http://{}", listener.local_addr()?);
        info!(
            "📦 Listings at {} and {}",
            config.route("/products"),
            config.route("/orders")
        );
        if config.cors_enabled {
            warn!("CORS: permissive mode enabled - all origins allowed");
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::listing::DynListingRepository,
        model::{order::Order, product::Product},
        testing::{DroppableRepository, FailingRepository, StaticRepository},
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Widget".into(),
                price: 9.99,
            },
            Product {
                id: 2,
                name: "Gadget".into(),
                price: 19.50,
            },
        ]
    }

    fn app(
        products: DynListingRepository<Product>,
        orders: DynListingRepository<Order>,
        config: &RouterConfig,
    ) -> Router {
        AppRouter::build(AppState::with_repositories(products, orders), config)
    }

    fn default_app() -> Router {
        app(
            Arc::new(StaticRepository::new(sample_products())),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::default(),
        )
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Response) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        (response.status(), response)
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_products_listing_body() {
        let (status, response) = send(default_app(), Method::GET, "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_text(response).await,
            r#"[{"id":1,"name":"Widget","price":9.99},{"id":2,"name":"Gadget","price":19.5}]"#
        );
    }

    #[tokio::test]
    async fn test_empty_orders_listing_is_empty_array() {
        let (status, response) = send(default_app(), Method::GET, "/api/orders").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn test_order_fields_and_element_count() {
        let orders: Vec<Order> = (1..=25)
            .map(|i| Order {
                id: i,
                product_id: i % 3 + 1,
                quantity: i * 2,
                total: i as f64 * 1.25,
            })
            .collect();

        let router = app(
            Arc::new(StaticRepository::<Product>::new(Vec::new())),
            Arc::new(StaticRepository::new(orders)),
            &RouterConfig::default(),
        );

        let (status, response) = send(router, Method::GET, "/api/orders").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 25);

        for (i, item) in items.iter().enumerate() {
            let object = item.as_object().unwrap();
            let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, vec!["id", "product_id", "quantity", "total"]);

            assert_eq!(object["id"].as_i64(), Some(i as i64 + 1));
            assert!(object["product_id"].is_i64());
            assert!(object["quantity"].is_i64());
            assert!(object["total"].is_number());
        }
    }

    #[tokio::test]
    async fn test_query_failure_is_plain_text_500() {
        let router = app(
            Arc::new(FailingRepository::<Product>::new(
                "relation \"products\" does not exist",
            )),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::default(),
        );

        let (status, response) = send(router, Method::GET, "/api/products").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("relation \"products\" does not exist"));
        assert!(!body.starts_with('['));
    }

    #[tokio::test]
    async fn test_recovers_after_connection_drop() {
        let products = Arc::new(DroppableRepository::new(sample_products()));
        let router = app(
            products.clone(),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::default(),
        );

        products.set_dropped(true);
        let (status, response) = send(router.clone(), Method::GET, "/api/products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(response).await.is_empty());

        // other listings keep working while products are down
        let (status, _) = send(router.clone(), Method::GET, "/api/orders").await;
        assert_eq!(status, StatusCode::OK);

        products.set_dropped(false);
        let (status, response) = send(router, Method::GET, "/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bare_prefix_routes() {
        let router = app(
            Arc::new(StaticRepository::new(sample_products())),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::new("", false),
        );

        let (status, _) = send(router.clone(), Method::GET, "/products").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(router.clone(), Method::GET, "/orders").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(router, Method::GET, "/api/products").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preflight_with_cors_enabled() {
        let router = app(
            Arc::new(StaticRepository::new(sample_products())),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::new("/api", true),
        );

        let (status, response) = send(router, Method::OPTIONS, "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        let headers = response.headers().clone();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-methods").unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            "Content-Type, Authorization"
        );
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_cors_headers_on_listing_response() {
        let router = app(
            Arc::new(StaticRepository::new(sample_products())),
            Arc::new(StaticRepository::<Order>::new(Vec::new())),
            &RouterConfig::new("/api", true),
        );

        let (status, response) = send(router, Method::GET, "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_no_cors_headers_when_disabled() {
        let (status, response) = send(default_app(), Method::GET, "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_metrics_count_listing_requests() {
        let router = default_app();

        let (status, _) = send(router.clone(), Method::GET, "/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let (status, response) = send(router, Method::GET, "/metrics").await;
        assert_eq!(status, StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("listing_requests_total"));
        assert!(body.contains("resource=\"products\""));
    }
}
