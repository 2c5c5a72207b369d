//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use axum::{
    extract::DefaultBodyLimit,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::{LatencyConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::observability::{metrics, spans};

/// Application state injected into handlers.
///
/// Read-only for the life of the process; cloning shares the catalog.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub latency: LatencyConfig,
}

impl AppState {
    pub fn new(catalog: Catalog, latency: LatencyConfig) -> Self {
        Self { catalog, latency }
    }
}

/// HTTP server for the storefront backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server serving the reference catalog.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_catalog(config, Catalog::reference())
    }

    /// Create a server serving the given catalog.
    pub fn with_catalog(config: ServiceConfig, catalog: Catalog) -> Self {
        let state = AppState::new(catalog, config.latency);
        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::banner))
            .route("/api/products", get(handlers::list_products))
            .route("/submit", post(handlers::submit_form))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.listener.max_body_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(|request: &Request<_>| spans::request_span(request)),
                    )
                    .layer(propagate_request_id_layer())
                    .layer(cors)
                    .layer(TimeoutLayer::new(config.timeouts.request())),
            )
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
