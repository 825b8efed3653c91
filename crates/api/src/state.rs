use std::sync::Arc;

use gamecatalog_core::service::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Business operations over the configured game repository.
    pub catalog: CatalogService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
