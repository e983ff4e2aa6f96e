//! Range and option types produced by facet derivation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive min/max over the present values of a numeric field.
///
/// `{0, 0}` when no value is present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd + Default> NumericRange<T> {
    /// Folds values into a range; NaN-like values that compare as
    /// unordered are ignored.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut bounds: Option<(T, T)> = None;
        for v in values {
            if v.partial_cmp(&v).is_none() {
                continue;
            }
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (
                    if v < lo { v } else { lo },
                    if v > hi { v } else { hi },
                ),
            });
        }

        match bounds {
            Some((min, max)) => Self { min, max },
            None => Self::default(),
        }
    }
}

/// Earliest and latest calendar day present. Serializes as
/// `YYYY-MM-DD` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }
}

/// Everything a filter UI needs to populate its controls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_range: NumericRange<i64>,
    pub date_range: DateRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_range_skips_nan() {
        let range = NumericRange::from_values([f64::NAN, 3.5, -1.0, f64::NAN]);
        assert_eq!(range, NumericRange { min: -1.0, max: 3.5 });
    }

    #[test]
    fn test_numeric_range_empty_is_zero() {
        let range: NumericRange<i64> = NumericRange::from_values(Vec::new());
        assert_eq!(range, NumericRange { min: 0, max: 0 });

        let range = NumericRange::from_values([f64::NAN]);
        assert_eq!(range, NumericRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_date_range_serialization() {
        let range = DateRange {
            min: NaiveDate::from_ymd_opt(2023, 1, 5),
            max: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["min"], "2023-01-05");
        assert_eq!(json["max"], "2024-12-31");

        let json = serde_json::to_value(DateRange::default()).unwrap();
        assert!(json["min"].is_null());
        assert!(json["max"].is_null());
    }

    #[test]
    fn test_filter_options_keys() {
        let json = serde_json::to_value(FilterOptions::default()).unwrap();
        for key in [
            "regions",
            "genders",
            "categories",
            "tags",
            "paymentMethods",
            "ageRange",
            "dateRange",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
