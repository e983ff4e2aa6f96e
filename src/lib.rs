//! retail-sales - In-memory retail sales dashboard
//!
//! A sales dataset is loaded once from CSV into a write-once store, then
//! answered through a query pipeline (search → filter → sort → paginate)
//! and a facet deriver for filter controls.

pub mod cli;
pub mod facets;
pub mod http_server;
pub mod observability;
pub mod pipeline;
pub mod record;
pub mod store;
