//! Facet derivation
//!
//! Every facet is recomputed from the full snapshot on each call. The
//! store never changes after load, so there is nothing to keep in sync.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event};
use crate::record::{NumericField, SalesRecord, TextField};
use crate::store::{RecordStore, StoreResult};

use super::ranges::{DateRange, FilterOptions, NumericRange};

/// Sorted distinct non-empty values of `field`
pub fn distinct_values(records: &[SalesRecord], field: TextField) -> Vec<String> {
    records
        .iter()
        .map(|r| r.text(field))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Min/max over the present, finite values of `field`
pub fn numeric_range(records: &[SalesRecord], field: NumericField) -> NumericRange<f64> {
    NumericRange::from_values(records.iter().filter_map(|r| r.number(field)))
}

pub fn age_range(records: &[SalesRecord]) -> NumericRange<i64> {
    NumericRange::from_values(records.iter().filter_map(|r| r.age))
}

pub fn date_range(records: &[SalesRecord]) -> DateRange {
    let mut days = records.iter().filter_map(|r| r.date.map(|d| d.date()));
    let first = match days.next() {
        Some(d) => d,
        None => return DateRange::default(),
    };
    let (min, max) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));

    DateRange {
        min: Some(min),
        max: Some(max),
    }
}

pub fn filter_options(records: &[SalesRecord]) -> FilterOptions {
    FilterOptions {
        regions: distinct_values(records, TextField::CustomerRegion),
        genders: distinct_values(records, TextField::Gender),
        categories: distinct_values(records, TextField::ProductCategory),
        tags: distinct_values(records, TextField::Tags),
        payment_methods: distinct_values(records, TextField::PaymentMethod),
        age_range: age_range(records),
        date_range: date_range(records),
    }
}

/// Derives facets from a shared [`RecordStore`]
#[derive(Debug, Clone)]
pub struct FacetDeriver {
    store: Arc<RecordStore>,
}

impl FacetDeriver {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn filter_options(&self) -> StoreResult<FilterOptions> {
        let records = self.store.snapshot()?;
        let options = filter_options(&records);

        let regions = options.regions.len().to_string();
        let categories = options.categories.len().to_string();
        log_event_with_fields(
            Event::FacetsDerived,
            &[
                ("categories", categories.as_str()),
                ("regions", regions.as_str()),
            ],
        );

        Ok(options)
    }

    pub fn distinct_values(&self, field: TextField) -> StoreResult<Vec<String>> {
        Ok(distinct_values(&self.store.snapshot()?, field))
    }

    pub fn numeric_range(&self, field: NumericField) -> StoreResult<NumericRange<f64>> {
        Ok(numeric_range(&self.store.snapshot()?, field))
    }

    pub fn date_range(&self) -> StoreResult<DateRange> {
        Ok(date_range(&self.store.snapshot()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use chrono::NaiveDate;

    fn with_age(age: Option<i64>) -> SalesRecord {
        SalesRecord {
            age,
            ..Default::default()
        }
    }

    #[test]
    fn test_age_range_ignores_absent() {
        let records = vec![with_age(Some(25)), with_age(None), with_age(Some(40)), with_age(Some(30))];
        assert_eq!(age_range(&records), NumericRange { min: 25, max: 40 });
    }

    #[test]
    fn test_distinct_values_sorted_non_empty() {
        let records: Vec<_> = ["West", "", "East", "West", "North"]
            .iter()
            .map(|r| SalesRecord {
                customer_region: r.to_string(),
                ..Default::default()
            })
            .collect();

        assert_eq!(
            distinct_values(&records, TextField::CustomerRegion),
            ["East", "North", "West"]
        );
    }

    #[test]
    fn test_numeric_range_over_amounts() {
        let records: Vec<_> = [Some(10.5), None, Some(2.25), Some(f64::NAN)]
            .iter()
            .map(|a| SalesRecord {
                final_amount: *a,
                ..Default::default()
            })
            .collect();

        assert_eq!(
            numeric_range(&records, NumericField::FinalAmount),
            NumericRange { min: 2.25, max: 10.5 }
        );
        assert_eq!(
            numeric_range(&records, NumericField::Quantity),
            NumericRange { min: 0.0, max: 0.0 }
        );
    }

    #[test]
    fn test_date_range_uses_calendar_days() {
        let at = |d: u32, h: u32| {
            NaiveDate::from_ymd_opt(2024, 3, d).and_then(|d| d.and_hms_opt(h, 30, 0))
        };
        let records: Vec<_> = [at(9, 23), None, at(2, 1), at(5, 12)]
            .into_iter()
            .map(|date| SalesRecord {
                date,
                ..Default::default()
            })
            .collect();

        let range = date_range(&records);
        assert_eq!(range.min, NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(range.max, NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_empty_store_ranges() {
        let options = filter_options(&[]);
        assert_eq!(options.age_range, NumericRange { min: 0, max: 0 });
        assert!(options.date_range.is_empty());
        assert!(options.regions.is_empty());
    }

    #[test]
    fn test_deriver_requires_ready_store() {
        let deriver = FacetDeriver::new(Arc::new(RecordStore::new()));
        assert!(matches!(deriver.filter_options(), Err(StoreError::NotReady)));
    }

    #[test]
    fn test_deriver_over_loaded_store() {
        let store = RecordStore::from_records(vec![
            SalesRecord {
                payment_method: "UPI".to_string(),
                ..Default::default()
            },
            SalesRecord {
                payment_method: "Cash".to_string(),
                ..Default::default()
            },
        ]);
        let deriver = FacetDeriver::new(Arc::new(store));

        let options = deriver.filter_options().unwrap();
        assert_eq!(options.payment_methods, ["Cash", "UPI"]);
        assert_eq!(
            deriver.distinct_values(TextField::PaymentMethod).unwrap(),
            options.payment_methods
        );
    }
}
