use std::sync::Arc;

use crate::config::Config;
use crate::dataset::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable profile dataset backend. Default: JsonFileSource.
    pub profiles: Arc<dyn ProfileSource>,
}
