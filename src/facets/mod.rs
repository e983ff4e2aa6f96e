//! Facet derivation
//!
//! Distinct values and ranges used to populate filter controls. Runs
//! independently of the query pipeline, always over the full store.

mod deriver;
mod ranges;

pub use deriver::{
    age_range, date_range, distinct_values, filter_options, numeric_range, FacetDeriver,
};
pub use ranges::{DateRange, FilterOptions, NumericRange};
