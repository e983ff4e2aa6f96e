//! Query parameters
//!
//! [`RawSalesQuery`] is the text-transport form: every field is an
//! optional string exactly as it arrived. [`RawSalesQuery::normalize`]
//! turns it into a typed [`QueryParams`], replacing each malformed field
//! with its default independently. Range validation happens later, in the
//! executor.

use std::collections::BTreeSet;
use std::fmt;
use std::num::IntErrorKind;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::record::{parse_date, parse_integer};

use super::errors::{QueryError, QueryResult};

/// Page size used when none (or a malformed one) is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound for page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort keys understood by the sort stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first; absent dates last
    #[default]
    Date,
    /// Highest quantity first; absent counts as zero
    Quantity,
    /// Case-insensitive A to Z; absent counts as empty
    CustomerName,
    /// Unrecognized key: keep the incoming order
    Unordered,
}

impl SortKey {
    /// Parses the `sortBy` parameter. Missing or empty selects `Date`;
    /// anything unrecognized selects `Unordered`.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("date") => SortKey::Date,
            Some("quantity") => SortKey::Quantity,
            Some("customerName") => SortKey::CustomerName,
            Some(_) => SortKey::Unordered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Quantity => "quantity",
            SortKey::CustomerName => "customerName",
            SortKey::Unordered => "none",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter predicates; an empty set or `None` bound imposes no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub regions: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_methods: BTreeSet<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Returns true when no predicate is active
    pub fn is_empty(&self) -> bool {
        self == &FilterCriteria::default()
    }

    /// Inclusive lower timestamp: start of `date_from`
    pub fn date_lower_bound(&self) -> Option<NaiveDateTime> {
        self.date_from.and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Inclusive upper timestamp: last millisecond of `date_to`
    pub fn date_upper_bound(&self) -> Option<NaiveDateTime> {
        self.date_to.and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
    }

    /// Rejects inverted age or date ranges
    pub fn validate(&self) -> QueryResult<()> {
        if let (Some(min), Some(max)) = (self.age_min, self.age_max) {
            if min > max {
                return Err(QueryError::invalid_age_range(min, max));
            }
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(QueryError::invalid_date_range(from, to));
            }
        }
        Ok(())
    }
}

/// A fully typed query request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub search: String,
    pub filters: FilterCriteria,
    pub sort: SortKey,
    /// 1-based requested page, before clamping to the result size
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterCriteria::default(),
            sort: SortKey::Date,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    pub fn validate(&self) -> QueryResult<()> {
        self.filters.validate()
    }
}

/// Query parameters as they arrive over a text transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSalesQuery {
    pub search: Option<String>,
    pub regions: Option<String>,
    pub genders: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub categories: Option<String>,
    pub tags: Option<String>,
    pub payment_methods: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl RawSalesQuery {
    /// Builds a query from decoded key/value pairs.
    ///
    /// Repeated list keys (`regions=North&regions=South`, or the bracketed
    /// `regions[]=North` form) are joined with `,`. A repeated scalar key
    /// keeps its first value. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = RawSalesQuery::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let key = key.strip_suffix("[]").unwrap_or(key);
            let value = value.into();

            let (slot, is_list) = match key {
                "search" => (&mut raw.search, false),
                "regions" => (&mut raw.regions, true),
                "genders" => (&mut raw.genders, true),
                "ageMin" => (&mut raw.age_min, false),
                "ageMax" => (&mut raw.age_max, false),
                "categories" => (&mut raw.categories, true),
                "tags" => (&mut raw.tags, true),
                "paymentMethods" => (&mut raw.payment_methods, true),
                "dateFrom" => (&mut raw.date_from, false),
                "dateTo" => (&mut raw.date_to, false),
                "sortBy" => (&mut raw.sort_by, false),
                "page" => (&mut raw.page, false),
                "pageSize" => (&mut raw.page_size, false),
                _ => continue,
            };

            match slot.as_mut() {
                Some(existing) => {
                    if is_list {
                        existing.push(',');
                        existing.push_str(&value);
                    }
                }
                None => *slot = Some(value),
            }
        }

        raw
    }

    /// Normalizes every field independently; never fails
    pub fn normalize(&self) -> QueryParams {
        QueryParams {
            search: self.search.clone().unwrap_or_default(),
            filters: FilterCriteria {
                regions: split_list(self.regions.as_deref()),
                genders: split_list(self.genders.as_deref()),
                age_min: parse_integer(self.age_min.as_deref()),
                age_max: parse_integer(self.age_max.as_deref()),
                categories: split_list(self.categories.as_deref()),
                tags: split_list(self.tags.as_deref()),
                payment_methods: split_list(self.payment_methods.as_deref()),
                date_from: parse_date(self.date_from.as_deref()).map(|d| d.date()),
                date_to: parse_date(self.date_to.as_deref()).map(|d| d.date()),
            },
            sort: SortKey::from_param(self.sort_by.as_deref()),
            page: parse_count(self.page.as_deref(), 1).max(1) as usize,
            page_size: parse_count(self.page_size.as_deref(), DEFAULT_PAGE_SIZE as i64)
                .clamp(1, MAX_PAGE_SIZE as i64) as usize,
        }
    }
}

/// Splits a comma-separated list, trimming and dropping empty entries
pub fn split_list(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Parses a page or page-size value. Malformed input and zero both fall
/// back to `default`; negatives and out-of-range integers saturate and are
/// left for the caller to clamp.
fn parse_count(raw: Option<&str>, default: i64) -> i64 {
    let Some(s) = raw.map(str::trim) else {
        return default;
    };
    match s.parse::<i64>() {
        Ok(0) => default,
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => default,
        },
    }
}
