//! Server Implementation
//!
//! HTTP server startup and graceful shutdown. Shutdown is cooperative: a
//! Ctrl-C cancels the state's token and axum drains in-flight requests, so
//! a store commit in progress always completes before the process exits.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::ServerState;

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    /// Build the application router with state and middleware attached
    pub fn build_router(state: ServerState) -> Router {
        api::router()
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let app = Self::build_router(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.state.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("inventory server listening on {}", addr);

        let shutdown = self.state.shutdown.clone();
        tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("shutdown signal received");
                    shutdown.cancel();
                }
            }
        });

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}
