//! Result types for query execution

use serde::Serialize;

use crate::record::SalesRecord;

use super::paginate::PageMetadata;

/// One page of query results.
///
/// Records are copies, detached from the store snapshot they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage {
    pub records: Vec<SalesRecord>,
    pub metadata: PageMetadata,
}

impl QueryPage {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter()
    }
}
