//! Query executor
//!
//! Execution flow (strict order):
//! 1. Take the store snapshot (fails when not ready)
//! 2. Validate age and date ranges
//! 3. Search
//! 4. Filter
//! 5. Sort
//! 6. Paginate
//!
//! Every stage is a pure function from an ordered sequence to an ordered
//! sequence of borrowed records; only the final page is copied out.

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event};
use crate::record::SalesRecord;
use crate::store::RecordStore;

use super::errors::{QueryError, QueryResult};
use super::filters::RecordFilter;
use super::paginate::Paginator;
use super::params::QueryParams;
use super::result::QueryPage;
use super::search::TextSearch;
use super::sorter::RecordSorter;

/// Runs queries against a shared [`RecordStore`]
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    store: Arc<RecordStore>,
}

impl QueryExecutor {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Executes a query and returns the requested page.
    ///
    /// Same parameters + same store = same page.
    pub fn execute(&self, params: &QueryParams) -> QueryResult<QueryPage> {
        let outcome = self
            .store
            .snapshot()
            .map_err(QueryError::from)
            .and_then(|records| run_pipeline(&records, params));

        match &outcome {
            Ok(page) => {
                let total = page.metadata.total.to_string();
                let returned = page.len().to_string();
                let pg = page.metadata.page.to_string();
                log_event_with_fields(
                    Event::QueryExecuted,
                    &[
                        ("page", pg.as_str()),
                        ("returned", returned.as_str()),
                        ("sort", params.sort.as_str()),
                        ("total", total.as_str()),
                    ],
                );
            }
            Err(e) => {
                log_event_with_fields(
                    Event::QueryRejected,
                    &[("code", e.code().code()), ("reason", e.message())],
                );
            }
        }

        outcome
    }
}

/// Validates `params` and runs search, filter, sort and paginate over
/// `records`
pub fn run_pipeline(records: &[SalesRecord], params: &QueryParams) -> QueryResult<QueryPage> {
    params.validate()?;

    let stage: Vec<&SalesRecord> = records.iter().collect();
    let stage = TextSearch::apply(stage, &params.search);
    let stage = RecordFilter::apply(stage, &params.filters);
    let stage = RecordSorter::sort(stage, params.sort);
    let (window, metadata) = Paginator::paginate(stage, params.page, params.page_size);

    Ok(QueryPage {
        records: window.into_iter().cloned().collect(),
        metadata,
    })
}
