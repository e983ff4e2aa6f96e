//! Lifecycle events emitted by the service
//!
//! Events are explicit and typed; the string form is what lands in the
//! `event` key of a log line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Process startup begins
    BootStart,
    /// Dataset loaded and server about to listen
    BootComplete,
    /// Startup aborted
    BootFailed,
    /// Configuration resolved
    ConfigLoaded,
    /// HTTP listener bound
    Serving,

    // Ingestion
    /// One source row could not be decoded and was dropped
    IngestRowSkipped,
    /// Source header has none of the expected columns
    IngestHeaderUnrecognized,

    // Queries
    /// Query pipeline completed
    QueryExecuted,
    /// Query refused (validation or not ready)
    QueryRejected,
    /// Facet options derived
    FacetsDerived,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SALES_STARTUP_BEGIN",
            Event::BootComplete => "SALES_STARTUP_COMPLETE",
            Event::BootFailed => "SALES_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SALES_SERVING",
            Event::IngestRowSkipped => "INGEST_ROW_SKIPPED",
            Event::IngestHeaderUnrecognized => "INGEST_HEADER_UNRECOGNIZED",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::FacetsDerived => "FACETS_DERIVED",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// Returns true if this event reports a recoverable problem
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::IngestRowSkipped | Event::IngestHeaderUnrecognized | Event::QueryRejected
        )
    }

    /// Returns true for high-volume per-request events
    pub fn is_per_request(&self) -> bool {
        matches!(self, Event::QueryExecuted | Event::FacetsDerived)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
