//! Axum-based HTTP server.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use veritier_client::AccountsClient;

use crate::error::RpcError;
use crate::handlers;

/// Shared state for request handlers.
pub struct AppState {
    /// Upstream accounts service client.
    pub accounts: AccountsClient,
}

/// The HTTP server, configured with a port and shared state.
pub struct RpcServer {
    pub port: u16,
    pub state: Arc<AppState>,
}

impl RpcServer {
    /// Create a server backed by the given accounts client.
    pub fn new(port: u16, accounts: AccountsClient) -> Self {
        Self {
            port,
            state: Arc::new(AppState { accounts }),
        }
    }

    /// Router with all handlers attached.
    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/profile/:uid/verification",
                get(handlers::get_verification_panel),
            )
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start listening for connections. Runs until the server is shut
    /// down.
    pub async fn start(&self) -> Result<(), RpcError> {
        let app = Self::router(self.state.clone());

        let addr = format!("0.0.0.0:{}", self.port);
        info!("RPC server listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        Ok(())
    }
}
