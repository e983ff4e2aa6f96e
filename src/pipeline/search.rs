//! Full-text search stage
//!
//! Case-insensitive substring match on customer name or phone number.
//! No tokenization, no fuzzy matching.

use crate::record::SalesRecord;

pub struct TextSearch;

impl TextSearch {
    /// Keeps the records whose name or phone contains `query`.
    ///
    /// A blank query returns the input untouched.
    pub fn apply<'a>(records: Vec<&'a SalesRecord>, query: &str) -> Vec<&'a SalesRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| Self::matches(record, &needle))
            .collect()
    }

    /// `needle` must already be lowercased
    fn matches(record: &SalesRecord, needle: &str) -> bool {
        record.customer_name.to_lowercase().contains(needle)
            || record.phone_number.to_lowercase().contains(needle)
    }
}
