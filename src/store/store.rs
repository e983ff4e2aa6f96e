//! Write-once in-memory record store
//!
//! The store starts empty and not ready. A single load-complete signal
//! publishes the collection; from then on it is read-only for the life of
//! the process. Readers receive a shared snapshot and never lock.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::observability::ObservationScope;
use crate::record::SalesRecord;

use super::errors::{StoreError, StoreResult};
use super::loader::{read_csv_file, IngestReport};

/// Holds the loaded sales collection
#[derive(Debug, Default)]
pub struct RecordStore {
    records: OnceLock<Arc<[SalesRecord]>>,
}

impl RecordStore {
    /// Creates an empty store that is not yet ready
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ready store holding `records`
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let store = Self::new();
        // A fresh store cannot already be loaded
        let _ = store.mark_loaded(records);
        store
    }

    /// Ingests the CSV file at `path` and publishes it.
    ///
    /// Returns the number of skipped rows alongside the store.
    pub fn load_csv(path: &Path) -> StoreResult<(Self, usize)> {
        let store = Self::new();
        let skipped = store.ingest_csv(path)?;
        Ok((store, skipped))
    }

    /// Ingests the CSV file at `path` into this store.
    ///
    /// Returns the number of rows skipped during ingestion.
    pub fn ingest_csv(&self, path: &Path) -> StoreResult<usize> {
        let path_str = path.display().to_string();
        let scope = ObservationScope::with_fields("DATASET_LOAD", &[("path", path_str.as_str())]);

        let IngestReport { records, skipped } = match read_csv_file(path) {
            Ok(report) => report,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e);
            }
        };

        let loaded = records.len();
        if let Err(e) = self.mark_loaded(records) {
            scope.fail(&e.to_string());
            return Err(e);
        }

        let loaded = loaded.to_string();
        let skipped_str = skipped.to_string();
        scope.complete_with_fields(&[
            ("records", loaded.as_str()),
            ("skipped", skipped_str.as_str()),
        ]);
        Ok(skipped)
    }

    /// The load-complete signal. May succeed at most once.
    pub fn mark_loaded(&self, records: Vec<SalesRecord>) -> StoreResult<()> {
        self.records
            .set(Arc::from(records))
            .map_err(|_| StoreError::AlreadyLoaded)
    }

    /// Returns true once the load-complete signal has been given
    pub fn is_ready(&self) -> bool {
        self.records.get().is_some()
    }

    /// Returns the full collection in source order
    pub fn snapshot(&self) -> StoreResult<Arc<[SalesRecord]>> {
        self.records.get().cloned().ok_or(StoreError::NotReady)
    }

    /// Returns the number of loaded records (0 when not ready)
    pub fn len(&self) -> usize {
        self.records.get().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
