//! CSV ingestion
//!
//! Reads a header row plus data rows and maps each row to a
//! [`SalesRecord`]. A row the reader cannot decode is skipped with a
//! warning; only an unopenable or unreadable source fails ingestion.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};
use crate::record::{ColumnMap, SalesRecord};

use super::errors::{StoreError, StoreResult};

/// Outcome of one ingestion run
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Records in source order
    pub records: Vec<SalesRecord>,
    /// Rows dropped because they could not be decoded
    pub skipped: usize,
}

/// Reads and maps every row of the CSV file at `path`
pub fn read_csv_file(path: &Path) -> StoreResult<IngestReport> {
    let file = File::open(path).map_err(|e| StoreError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_csv(BufReader::new(file))
}

/// Reads and maps every row of CSV data from `source`
pub fn read_csv<R: Read>(source: R) -> StoreResult<IngestReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| StoreError::Read(format!("invalid header row: {}", e)))?
        .clone();
    let columns = ColumnMap::from_headers(headers.iter());

    if columns.recognized() == 0 {
        let found = headers.iter().collect::<Vec<_>>().join(",");
        log_event_with_fields(Event::IngestHeaderUnrecognized, &[("headers", found.as_str())]);
    }

    let mut report = IngestReport::default();

    for row in reader.records() {
        match row {
            Ok(row) => {
                report.records.push(columns.to_record(|i| row.get(i)));
            }
            Err(e) if e.is_io_error() => {
                return Err(StoreError::Read(e.to_string()));
            }
            Err(e) => {
                report.skipped += 1;
                let line = e
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let reason = e.to_string();
                log_event_with_fields(
                    Event::IngestRowSkipped,
                    &[("line", line.as_str()), ("reason", reason.as_str())],
                );
            }
        }
    }

    Ok(report)
}
