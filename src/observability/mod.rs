//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//! - Operational counters
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes a query result
//! 2. Logging never fails the caller
//! 3. No background threads
//!
//! # Usage
//!
//! ```ignore
//! use retail_sales::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::ConfigLoaded, &[("port", "5000")]);
//!
//! let scope = ObservationScope::new("DATASET_LOAD");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else if event.is_per_request() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
