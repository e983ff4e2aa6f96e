//! Query pipeline
//!
//! Applies search → filter → sort → paginate, strictly in that order,
//! over a snapshot of the record store.
//!
//! # Stages
//!
//! - [`TextSearch`]: case-insensitive substring on name or phone
//! - [`RecordFilter`]: AND across categories, OR within a category
//! - [`RecordSorter`]: stable, by one [`SortKey`]
//! - [`Paginator`]: clamped window plus metadata
//!
//! # Errors
//!
//! Only inverted ranges and a not-ready store reject a query. Malformed
//! transport values are normalized by [`RawSalesQuery::normalize`].

mod errors;
mod executor;
mod filters;
mod paginate;
mod params;
mod result;
mod search;
mod sorter;

pub use errors::{QueryError, QueryErrorCode, QueryResult, Severity};
pub use executor::{run_pipeline, QueryExecutor};
pub use filters::RecordFilter;
pub use paginate::{PageMetadata, Paginator};
pub use params::{
    split_list, FilterCriteria, QueryParams, RawSalesQuery, SortKey, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use result::QueryPage;
pub use search::TextSearch;
pub use sorter::RecordSorter;
