use std::sync::Arc;

use hivemind_service::{DomainService, SessionManager};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service and session manager share one store.
#[derive(Clone)]
pub struct AppState {
    /// Domain operations over the configured store.
    pub service: DomainService,
    /// The store's current-user pointer.
    pub sessions: SessionManager,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(service: DomainService, config: ServerConfig) -> Self {
        let sessions = service.sessions();
        Self {
            service,
            sessions,
            config: Arc::new(config),
        }
    }
}
