use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use polls_core::{Clock, QuestionStore};

use super::response::PageError;
use super::tracing::tracing_middleware;
use crate::views;

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Number of questions on the index page.
    pub index_limit: usize,
    /// Site title shown in page titles.
    pub site_title: String,
    /// Log each request through the HTTP trace layer.
    pub log_requests: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            index_limit: 5,
            site_title: "polls".to_string(),
            log_requests: true,
        }
    }
}

impl From<&polls_core::PollsConfig> for GatewayConfig {
    fn from(config: &polls_core::PollsConfig) -> Self {
        Self {
            host: config.gateway.host.clone(),
            port: config.gateway.port,
            index_limit: config.gateway.index_limit,
            site_title: config.project.name.clone(),
            log_requests: config.observability.logging.log_requests,
        }
    }
}

/// State shared by all page handlers.
#[derive(Clone)]
pub struct PollsState {
    pub store: Arc<dyn QuestionStore>,
    pub clock: Arc<dyn Clock>,
    pub index_limit: usize,
    pub site_title: Arc<str>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Gateway HTTP server.
pub struct GatewayServer {
    config: GatewayConfig,
    store: Arc<dyn QuestionStore>,
    clock: Arc<dyn Clock>,
}

impl GatewayServer {
    /// Create a new gateway server.
    pub fn new(
        config: GatewayConfig,
        store: Arc<dyn QuestionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            store,
            clock,
        }
    }

    /// Build the Axum router.
    pub fn router(&self) -> Router {
        let state = PollsState {
            store: self.store.clone(),
            clock: self.clock.clone(),
            index_limit: self.config.index_limit,
            site_title: Arc::from(self.config.site_title.as_str()),
        };

        let router = Router::new()
            // Health check endpoint
            .route("/health", get(health_handler))
            .route("/", get(|| async { Redirect::permanent("/polls/") }))
            .route("/polls/", get(views::index))
            .route("/polls/{id}/", get(views::detail))
            .route("/polls/{id}/results/", get(views::results))
            .route("/polls/{id}/vote/", post(views::vote))
            .fallback(|| async { PageError::NotFound })
            .with_state(state);

        let router = if self.config.log_requests {
            router.layer(TraceLayer::new_for_http())
        } else {
            router
        };

        router.layer(ServiceBuilder::new().layer(middleware::from_fn(tracing_middleware)))
    }

    /// Get the socket address to bind to.
    pub fn addr(&self) -> Result<SocketAddr, std::io::Error> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run(
        self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = self.addr()?;
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Gateway server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Health check handler.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
