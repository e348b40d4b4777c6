//! API Server - HTTP server for the REST API

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::Result;

/// HTTP server wrapping the shared state handle
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    pub fn new(state: Arc<AppState>, addr: String) -> Self {
        Self { state, addr }
    }

    /// Build the router; exposed separately so tests can drive it in-process.
    pub fn router(state: Arc<AppState>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/train", post(handlers::train))
            .route("/api/predict", post(handlers::predict))
            .route("/api/predictions", get(handlers::predictions))
            .route("/api/notify", post(handlers::notify))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn run(self) -> Result<()> {
        let router = Self::router(self.state);
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("API server listening on {}", self.addr);

        axum::serve(listener, router).await?;
        Ok(())
    }
}
