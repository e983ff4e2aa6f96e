//! Query Pipeline Invariant Tests
//!
//! - Search is a no-op for blank input and only ever narrows
//! - Filtering is idempotent and vacuous for empty criteria
//! - Date sort is stable, descending, absent dates last
//! - Pagination always clamps, never fails
//! - Inverted ranges reject the whole query

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use retail_sales::facets::{filter_options, NumericRange};
use retail_sales::pipeline::{
    run_pipeline, FilterCriteria, Paginator, QueryErrorCode, QueryExecutor, QueryParams,
    RawSalesQuery, RecordFilter, RecordSorter, SortKey, TextSearch,
};
use retail_sales::record::SalesRecord;
use retail_sales::store::RecordStore;

// =============================================================================
// Helper Functions
// =============================================================================

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// 25 records, 12 of them in "North"
fn fixture() -> Vec<SalesRecord> {
    (0..25)
        .map(|i| SalesRecord {
            customer_id: format!("C{:02}", i),
            customer_name: format!("Customer {:02}", i),
            phone_number: format!("98765{:05}", i),
            customer_region: if i < 12 {
                "North".to_string()
            } else {
                REGIONS[1 + i % 3].to_string()
            },
            age: if i % 7 == 0 { None } else { Some(18 + i as i64 * 2) },
            quantity: Some((i % 5) as i64),
            date: if i % 6 == 0 {
                None
            } else {
                NaiveDate::from_ymd_opt(2024, 1, 1 + (i % 4) as u32)
                    .and_then(|d| d.and_hms_opt((i % 24) as u32, 15, 0))
            },
            ..Default::default()
        })
        .collect()
}

fn ids(records: &[&SalesRecord]) -> Vec<String> {
    records.iter().map(|r| r.customer_id.clone()).collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// =============================================================================
// Search Tests
// =============================================================================

/// Blank search returns the input unchanged.
#[test]
fn test_blank_search_is_identity() {
    let data = fixture();
    let all: Vec<&SalesRecord> = data.iter().collect();

    for blank in ["", "   ", "\t"] {
        let out = TextSearch::apply(all.clone(), blank);
        assert_eq!(ids(&out), ids(&all));
    }
}

/// Every search hit contains the term in name or phone.
#[test]
fn test_search_results_contain_term() {
    let data = fixture();

    for term in ["customer 1", "CUSTOMER 2", "98765000", "zzz"] {
        let out = TextSearch::apply(data.iter().collect(), term);
        let needle = term.to_lowercase();
        for r in &out {
            assert!(
                r.customer_name.to_lowercase().contains(&needle)
                    || r.phone_number.to_lowercase().contains(&needle)
            );
        }
        assert!(out.len() <= data.len());
    }
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Empty criteria keep everything, in order.
#[test]
fn test_empty_filter_is_identity() {
    let data = fixture();
    let all: Vec<&SalesRecord> = data.iter().collect();
    let out = RecordFilter::apply(all.clone(), &FilterCriteria::default());
    assert_eq!(ids(&out), ids(&all));
}

/// filter(filter(C, f), f) = filter(C, f)
#[test]
fn test_filter_is_idempotent() {
    let data = fixture();
    let criteria = FilterCriteria {
        regions: set(&["North", "East"]),
        age_min: Some(20),
        age_max: Some(50),
        date_from: NaiveDate::from_ymd_opt(2024, 1, 2),
        ..Default::default()
    };

    let once = RecordFilter::apply(data.iter().collect(), &criteria);
    let twice = RecordFilter::apply(once.clone(), &criteria);
    assert_eq!(ids(&once), ids(&twice));
    assert!(!once.is_empty());
}

/// A single-day range includes every time of that day.
#[test]
fn test_same_day_range_includes_whole_day() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let data: Vec<SalesRecord> = [(0, 0, 0), (12, 30, 0), (23, 59, 59)]
        .iter()
        .enumerate()
        .map(|(i, (h, m, s))| SalesRecord {
            customer_id: i.to_string(),
            date: day.and_hms_opt(*h, *m, *s),
            ..Default::default()
        })
        .collect();

    let raw = RawSalesQuery {
        date_from: Some("2024-01-01".to_string()),
        date_to: Some("2024-01-01".to_string()),
        sort_by: Some("none".to_string()),
        ..Default::default()
    };
    let page = run_pipeline(&data, &raw.normalize()).unwrap();
    assert_eq!(page.metadata.total, 3);
}

// =============================================================================
// Sort Tests
// =============================================================================

/// Present dates descend; absent dates trail in input order.
#[test]
fn test_date_sort_absent_last() {
    let data = fixture();
    let out = RecordSorter::sort(data.iter().collect(), SortKey::Date);

    let first_absent = out.iter().position(|r| r.date.is_none()).unwrap();
    assert!(out[first_absent..].iter().all(|r| r.date.is_none()));
    assert!(out[..first_absent]
        .windows(2)
        .all(|w| w[0].date >= w[1].date));

    let absent: Vec<_> = out[first_absent..]
        .iter()
        .map(|r| r.customer_id.clone())
        .collect();
    assert_eq!(absent, ["C00", "C06", "C12", "C18", "C24"]);
}

/// Unknown sort keys leave the filtered order untouched.
#[test]
fn test_unknown_sort_key_keeps_order() {
    let data = fixture();
    let raw = RawSalesQuery {
        regions: Some("North".to_string()),
        sort_by: Some("unknownkey".to_string()),
        page_size: Some("100".to_string()),
        ..Default::default()
    };

    let page = run_pipeline(&data, &raw.normalize()).unwrap();
    let got: Vec<_> = page.iter().map(|r| r.customer_id.clone()).collect();
    let expected: Vec<_> = (0..12).map(|i| format!("C{:02}", i)).collect();
    assert_eq!(got, expected);
}

// =============================================================================
// Pagination Tests
// =============================================================================

#[test]
fn test_pagination_bounds() {
    let data = fixture();
    let all: Vec<&SalesRecord> = data.iter().collect();

    let (_, meta) = Paginator::paginate(all.clone(), 0, 10);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.total, data.len());

    let (_, meta) = Paginator::paginate(all, 10_000, 10);
    assert_eq!(meta.page, meta.total_pages);

    let (_, meta) = Paginator::paginate(Vec::new(), 1, 10);
    assert_eq!(meta.total_pages, 1);
}

/// 25 records, 12 North, page 2 of size 10 → 2 records.
#[test]
fn test_north_second_page_scenario() {
    let exec = QueryExecutor::new(Arc::new(RecordStore::from_records(fixture())));
    let raw = RawSalesQuery {
        regions: Some("North".to_string()),
        page: Some("2".to_string()),
        page_size: Some("10".to_string()),
        ..Default::default()
    };

    let page = exec.execute(&raw.normalize()).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.metadata.total, 12);
    assert_eq!(page.metadata.page, 2);
    assert_eq!(page.metadata.page_size, 10);
    assert_eq!(page.metadata.total_pages, 2);
    assert!(page.iter().all(|r| r.customer_region == "North"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_inverted_age_range_rejected() {
    let raw = RawSalesQuery {
        age_min: Some("30".to_string()),
        age_max: Some("20".to_string()),
        ..Default::default()
    };
    let err = run_pipeline(&fixture(), &raw.normalize()).unwrap_err();
    assert_eq!(err.code(), QueryErrorCode::SalesInvalidAgeRange);
    assert!(err.is_validation());
}

#[test]
fn test_inverted_date_range_rejected() {
    let raw = RawSalesQuery {
        date_from: Some("2024-02-01".to_string()),
        date_to: Some("2024-01-01".to_string()),
        ..Default::default()
    };
    let err = run_pipeline(&fixture(), &raw.normalize()).unwrap_err();
    assert_eq!(err.code(), QueryErrorCode::SalesInvalidDateRange);
}

/// Malformed paging never rejects.
#[test]
fn test_malformed_paging_falls_back() {
    let raw = RawSalesQuery {
        page: Some("abc".to_string()),
        page_size: Some("lots".to_string()),
        age_min: Some("young".to_string()),
        ..Default::default()
    };
    let params = raw.normalize();
    assert_eq!(params, QueryParams::default());

    let page = run_pipeline(&fixture(), &params).unwrap();
    assert_eq!(page.metadata.page, 1);
    assert_eq!(page.metadata.page_size, 10);
}

// =============================================================================
// Facet Tests
// =============================================================================

#[test]
fn test_facets_age_range_scenario() {
    let data: Vec<SalesRecord> = [Some(25), None, Some(40), Some(30)]
        .into_iter()
        .map(|age| SalesRecord {
            age,
            ..Default::default()
        })
        .collect();

    assert_eq!(filter_options(&data).age_range, NumericRange { min: 25, max: 40 });
}

#[test]
fn test_facet_regions_are_distinct_and_sorted() {
    let options = filter_options(&fixture());
    assert_eq!(options.regions, ["East", "North", "South", "West"]);
}
