//! Record Store subsystem
//!
//! Owns the sales collection loaded once at startup.
//!
//! # Lifecycle
//!
//! 1. `RecordStore::new()`: empty, every read fails with `NotReady`
//! 2. Ingestion reads the CSV source (rows that fail to decode are skipped)
//! 3. `mark_loaded()`: the single load-complete signal
//! 4. Read-only until process exit

mod errors;
mod loader;
mod store;

pub use errors::{StoreError, StoreResult};
pub use loader::{read_csv, read_csv_file, IngestReport};
pub use store::RecordStore;
