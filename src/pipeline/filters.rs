//! Multi-field filter stage
//!
//! AND across categories, OR within a category. An empty value set or an
//! unset bound imposes no constraint. Range bounds are inclusive and
//! exclude records whose field is absent.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::record::SalesRecord;

use super::params::FilterCriteria;

/// Evaluates filter criteria against records
pub struct RecordFilter;

impl RecordFilter {
    /// Keeps the records that satisfy every active predicate
    pub fn apply<'a>(records: Vec<&'a SalesRecord>, criteria: &FilterCriteria) -> Vec<&'a SalesRecord> {
        if criteria.is_empty() {
            return records;
        }

        let bounds = DateBounds {
            from: criteria.date_lower_bound(),
            to: criteria.date_upper_bound(),
        };

        records
            .into_iter()
            .filter(|record| Self::matches_with(record, criteria, &bounds))
            .collect()
    }

    /// Checks a single record against all predicates
    pub fn matches(record: &SalesRecord, criteria: &FilterCriteria) -> bool {
        let bounds = DateBounds {
            from: criteria.date_lower_bound(),
            to: criteria.date_upper_bound(),
        };
        Self::matches_with(record, criteria, &bounds)
    }

    fn matches_with(record: &SalesRecord, criteria: &FilterCriteria, bounds: &DateBounds) -> bool {
        Self::in_set(&criteria.regions, &record.customer_region)
            && Self::in_set(&criteria.genders, &record.gender)
            && Self::age_in_range(record.age, criteria.age_min, criteria.age_max)
            && Self::in_set(&criteria.categories, &record.product_category)
            && Self::in_set(&criteria.tags, &record.tags)
            && Self::in_set(&criteria.payment_methods, &record.payment_method)
            && bounds.contains(record.date)
    }

    /// Exact, case-sensitive membership; empty set accepts everything
    fn in_set(accepted: &BTreeSet<String>, value: &str) -> bool {
        accepted.is_empty() || accepted.contains(value)
    }

    fn age_in_range(age: Option<i64>, min: Option<i64>, max: Option<i64>) -> bool {
        if min.is_none() && max.is_none() {
            return true;
        }
        match age {
            None => false,
            Some(age) => min.map_or(true, |m| age >= m) && max.map_or(true, |m| age <= m),
        }
    }
}

struct DateBounds {
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

impl DateBounds {
    fn contains(&self, date: Option<NaiveDateTime>) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        match date {
            None => false,
            Some(d) => self.from.map_or(true, |f| d >= f) && self.to.map_or(true, |t| d <= t),
        }
    }
}
