//! Pagination stage
//!
//! Out-of-range requests never fail: page size is clamped to
//! `[1, MAX_PAGE_SIZE]` and the page to `[1, total_pages]`, where
//! `total_pages` is at least 1 even for an empty collection.

use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

use super::params::MAX_PAGE_SIZE;

/// Describes the window returned by the pagination stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Records in the ordered collection, before windowing
    pub total: usize,
    /// Clamped 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

pub struct Paginator;

impl Paginator {
    /// Cuts the window for `page` out of `records`
    pub fn paginate<'a>(
        records: Vec<&'a SalesRecord>,
        page: usize,
        page_size: usize,
    ) -> (Vec<&'a SalesRecord>, PageMetadata) {
        let metadata = Self::metadata(records.len(), page, page_size);

        let start = (metadata.page - 1) * metadata.page_size;
        let window = records
            .into_iter()
            .skip(start)
            .take(metadata.page_size)
            .collect();

        (window, metadata)
    }

    /// Computes clamped metadata for a collection of `total` records
    pub fn metadata(total: usize, page: usize, page_size: usize) -> PageMetadata {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        PageMetadata {
            total,
            page,
            page_size,
            total_pages,
        }
    }
}
