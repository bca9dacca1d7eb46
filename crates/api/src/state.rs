use std::sync::Arc;

use portfolio_db::ProjectStore;

use crate::config::ServerConfig;
use crate::links::ResourceLinks;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: portfolio_db::DbPool,
    /// Server configuration, fixed at startup.
    pub config: Arc<ServerConfig>,
    /// Project storage used by the `/projects` handlers.
    pub projects: Arc<dyn ProjectStore>,
    /// Absolute link builder rooted at the configured public URL.
    pub links: Arc<ResourceLinks>,
}
