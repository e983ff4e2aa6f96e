//! Sales HTTP Routes
//!
//! - `GET /sales` runs the query pipeline
//! - `GET /sales/filter-options` derives facets from the full store

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::facets::{FacetDeriver, FilterOptions};
use crate::observability::MetricsRegistry;
use crate::pipeline::{PageMetadata, QueryExecutor, RawSalesQuery};
use crate::record::SalesRecord;
use crate::store::RecordStore;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Sales state shared across handlers
pub struct SalesState {
    pub executor: QueryExecutor,
    pub facets: FacetDeriver,
    pub metrics: Arc<MetricsRegistry>,
}

impl SalesState {
    pub fn new(store: Arc<RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            executor: QueryExecutor::new(Arc::clone(&store)),
            facets: FacetDeriver::new(store),
            metrics,
        }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct SalesResponse {
    pub success: bool,
    pub data: Vec<SalesRecord>,
    pub metadata: PageMetadata,
}

#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub success: bool,
    pub data: FilterOptions,
}

// ==================
// Routes
// ==================

pub fn sales_routes(state: Arc<SalesState>) -> Router {
    Router::new()
        .route("/sales", get(list_sales_handler))
        .route("/sales/filter-options", get(filter_options_handler))
        .with_state(state)
}

async fn list_sales_handler(
    State(state): State<Arc<SalesState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<SalesResponse>> {
    let Query(pairs) = query?;
    let params = RawSalesQuery::from_pairs(pairs).normalize();

    match state.executor.execute(&params) {
        Ok(page) => {
            state.metrics.increment_queries_executed();
            Ok(Json(SalesResponse {
                success: true,
                data: page.records,
                metadata: page.metadata,
            }))
        }
        Err(e) => {
            state.metrics.increment_queries_rejected();
            Err(ApiError::from(e))
        }
    }
}

async fn filter_options_handler(
    State(state): State<Arc<SalesState>>,
) -> ApiResult<Json<FilterOptionsResponse>> {
    state.metrics.increment_facet_requests();
    let options = state.facets.filter_options()?;

    Ok(Json(FilterOptionsResponse {
        success: true,
        data: options,
    }))
}
