//! Sales record model
//!
//! Defines the immutable [`SalesRecord`] and the parsing rules that turn
//! raw source cells into typed fields.
//!
//! # Absence
//!
//! - String fields are never absent; failure yields `""`
//! - Numeric and date fields are `None` on failure, distinct from zero

mod parse;
mod types;

pub use parse::{parse_date, parse_decimal, parse_integer, parse_text, ColumnMap, COLUMNS};
pub use types::{NumericField, SalesRecord, TextField};
