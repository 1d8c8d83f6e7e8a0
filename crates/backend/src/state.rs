use crate::{
    abstract_trait::listing::DynListingRepository,
    di::{DependenciesInject, DependenciesInjectDeps},
    model::{order::Order, product::Product},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps { pool };
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }

    pub fn with_repositories(
        product_repo: DynListingRepository<Product>,
        order_repo: DynListingRepository<Order>,
    ) -> Self {
        let mut registry = Registry::default();
        let di_container =
            DependenciesInject::with_repositories(product_repo, order_repo, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
