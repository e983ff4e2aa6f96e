//! # HTTP Server Module
//!
//! Serves the query pipeline and facet deriver over HTTP with axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/sales` - Search, filter, sort and paginate
//! - `/api/sales/filter-options` - Facets for filter controls
//! - `/observability/*` - Health and counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod sales_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use sales_routes::SalesState;
pub use server::{build_router, HttpServer};
