use crate::{
    abstract_trait::listing::{DynListingRepository, DynListingService},
    domain::response::{order::OrderResponse, product::ProductResponse},
    model::{order::Order, product::Product},
    repository::ListingRepository,
    service::ListingService,
};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynListingService<ProductResponse>,
    pub order_query: DynListingService<OrderResponse>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("order_query", &"OrderQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { pool } = deps;

        let product_repo: DynListingRepository<Product> =
            Arc::new(ListingRepository::<Product>::new(pool.clone()));
        let order_repo: DynListingRepository<Order> =
            Arc::new(ListingRepository::<Order>::new(pool));

        Self::with_repositories(product_repo, order_repo, registry)
    }

    pub fn with_repositories(
        product_repo: DynListingRepository<Product>,
        order_repo: DynListingRepository<Order>,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry);

        let product_query: DynListingService<ProductResponse> = Arc::new(
            ListingService::<Product, ProductResponse>::new(product_repo, metrics.clone()),
        );

        let order_query: DynListingService<OrderResponse> = Arc::new(
            ListingService::<Order, OrderResponse>::new(order_repo, metrics),
        );

        Self {
            product_query,
            order_query,
        }
    }
}
