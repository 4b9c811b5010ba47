use std::sync::Arc;

use crate::catalog::Catalogs;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; shared without locking.
    pub catalogs: Arc<Catalogs>,
}

impl AppState {
    pub fn new(config: Config, catalogs: Catalogs) -> Self {
        AppState {
            config,
            catalogs: Arc::new(catalogs),
        }
    }
}
