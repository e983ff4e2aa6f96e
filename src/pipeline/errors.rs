//! Query pipeline error types
//!
//! Error codes:
//! - SALES_INVALID_AGE_RANGE (REJECT)
//! - SALES_INVALID_DATE_RANGE (REJECT)
//! - SALES_NOT_READY (UNAVAILABLE)
//!
//! Malformed-but-recoverable inputs never produce an error; they are
//! normalized per field before validation runs.

use std::fmt;

use crate::store::StoreError;

/// How an error should be classified at the serving boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The request itself is invalid
    Reject,
    /// The service cannot answer yet
    Unavailable,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// ageMin greater than ageMax
    SalesInvalidAgeRange,
    /// dateFrom later than dateTo
    SalesInvalidDateRange,
    /// Query issued before the dataset finished loading
    SalesNotReady,
}

impl QueryErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::SalesInvalidAgeRange => "SALES_INVALID_AGE_RANGE",
            QueryErrorCode::SalesInvalidDateRange => "SALES_INVALID_DATE_RANGE",
            QueryErrorCode::SalesNotReady => "SALES_NOT_READY",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            QueryErrorCode::SalesNotReady => Severity::Unavailable,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected query. No partial result accompanies it.
#[derive(Debug, Clone)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
}

impl QueryError {
    pub fn invalid_age_range(min: i64, max: i64) -> Self {
        Self {
            code: QueryErrorCode::SalesInvalidAgeRange,
            message: format!(
                "Invalid age range: ageMin ({}) cannot be greater than ageMax ({})",
                min, max
            ),
        }
    }

    pub fn invalid_date_range(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self {
            code: QueryErrorCode::SalesInvalidDateRange,
            message: format!(
                "Invalid date range: dateFrom ({}) cannot be after dateTo ({})",
                from, to
            ),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            code: QueryErrorCode::SalesNotReady,
            message: "Data not loaded yet; try again once ingestion completes".to_string(),
        }
    }

    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true for client-input errors
    pub fn is_validation(&self) -> bool {
        self.severity() == Severity::Reject
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for QueryError {}

impl From<StoreError> for QueryError {
    fn from(_: StoreError) -> Self {
        // Reads only ever fail because the store is not loaded yet
        Self::not_ready()
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
