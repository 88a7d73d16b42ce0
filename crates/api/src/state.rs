//! Shared application state

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, routing::RouterConfig, sites::SiteStore};

/// State shared by every handler and middleware layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Host-router snapshot, fixed at startup
    pub router: Arc<RouterConfig>,
    pub pool: PgPool,
    pub sites: SiteStore,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let router = Arc::new(config.router_config());
        let sites = SiteStore::new(pool.clone());
        Self {
            config: Arc::new(config),
            router,
            pool,
            sites,
        }
    }
}
