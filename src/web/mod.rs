//! Web layer module
//!
//! A small HTTP surface over `ResolverService`: thin handlers, a shared
//! `AppState`, CORS/trace middleware, and separate health/readiness/liveness
//! endpoints.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::ResolverService;

pub mod handlers;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver_service: ResolverService,
}

pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, resolver_service: ResolverService) -> anyhow::Result<Self> {
        let app = Self::create_router(AppState { resolver_service });
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        Ok(Self { app, addr })
    }

    fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/live", get(handlers::liveness_check))
            .nest("/api/v1", Self::api_v1_routes())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    fn api_v1_routes() -> Router<AppState> {
        Router::new().route("/resolve", post(handlers::resolve))
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Exposed for integration tests that want to drive the router directly
    /// with `tower::ServiceExt::oneshot` rather than binding a socket.
    pub fn router(state: AppState) -> Router {
        Self::create_router(state)
    }
}
