use std::sync::Arc;

use crate::config::Config;
use crate::models::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable for the process lifetime; handlers only read it.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        AppState {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
