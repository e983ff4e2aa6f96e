//! # HTTP Server
//!
//! Combines the sales and observability routers behind a CORS layer.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::RecordStore;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::sales_routes::{sales_routes, SalesState};

/// HTTP server for the sales dashboard API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`; the store may still be loading
    pub fn new(
        config: HttpServerConfig,
        store: Arc<RecordStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        let router = build_router(&config, store, metrics);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        let addr_str = addr.to_string();
        log_event_with_fields(Event::Serving, &[("addr", addr_str.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(
    config: &HttpServerConfig,
    store: Arc<RecordStore>,
    metrics: Arc<MetricsRegistry>,
) -> Router {
    let sales_state = Arc::new(SalesState::new(store, Arc::clone(&metrics)));

    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Health check at root level
        .merge(health_routes())
        .nest("/api", sales_routes(sales_state))
        .nest("/observability", observability_routes(metrics))
        .layer(cors)
}
