//! Per-field parsing of raw source values
//!
//! Strings never fail: they are trimmed and default to empty.
//! Numbers and dates become `None` on any parse failure, never zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::types::SalesRecord;

/// Source column headers, in file order
pub const COLUMNS: [&str; 25] = [
    "Customer ID",
    "Customer Name",
    "Phone Number",
    "Gender",
    "Age",
    "Customer Region",
    "Customer Type",
    "Product ID",
    "Product Name",
    "Brand",
    "Product Category",
    "Tags",
    "Quantity",
    "Price per Unit",
    "Discount Percentage",
    "Total Amount",
    "Final Amount",
    "Date",
    "Payment Method",
    "Order Status",
    "Delivery Type",
    "Store ID",
    "Store Location",
    "Salesperson ID",
    "Employee Name",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Trims a raw value; absent input yields an empty string
pub fn parse_text(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Parses a finite decimal number
pub fn parse_decimal(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an integral number; fractional values are absent
pub fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let value = parse_decimal(Some(raw))?;
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Parses a calendar timestamp in any of the accepted source forms
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Maps source headers to column positions
#[derive(Debug, Clone)]
pub struct ColumnMap {
    positions: [Option<usize>; 25],
}

impl ColumnMap {
    /// Builds the map from a header row; unknown headers are ignored
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut positions = [None; 25];
        for (idx, header) in headers.into_iter().enumerate() {
            let header = header.trim().trim_start_matches('\u{feff}');
            if let Some(col) = COLUMNS.iter().position(|c| *c == header) {
                positions[col] = Some(idx);
            }
        }
        Self { positions }
    }

    /// Returns the number of known columns present in the header
    pub fn recognized(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    /// Builds a record from one row of values
    pub fn to_record<'a, F>(&self, get: F) -> SalesRecord
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let value = |col: usize| self.positions[col].and_then(&get);

        SalesRecord {
            customer_id: parse_text(value(0)),
            customer_name: parse_text(value(1)),
            phone_number: parse_text(value(2)),
            gender: parse_text(value(3)),
            age: parse_integer(value(4)),
            customer_region: parse_text(value(5)),
            customer_type: parse_text(value(6)),
            product_id: parse_text(value(7)),
            product_name: parse_text(value(8)),
            brand: parse_text(value(9)),
            product_category: parse_text(value(10)),
            tags: parse_text(value(11)),
            quantity: parse_integer(value(12)),
            price_per_unit: parse_decimal(value(13)),
            discount_percentage: parse_decimal(value(14)),
            total_amount: parse_decimal(value(15)),
            final_amount: parse_decimal(value(16)),
            date: parse_date(value(17)),
            payment_method: parse_text(value(18)),
            order_status: parse_text(value(19)),
            delivery_type: parse_text(value(20)),
            store_id: parse_text(value(21)),
            store_location: parse_text(value(22)),
            salesperson_id: parse_text(value(23)),
            employee_name: parse_text(value(24)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_text_defaults_to_empty() {
        assert_eq!(parse_text(None), "");
        assert_eq!(parse_text(Some("  North ")), "North");
        assert_eq!(parse_text(Some("")), "");
    }

    #[test]
    fn test_decimal_absent_on_failure() {
        assert_eq!(parse_decimal(Some("12.50")), Some(12.5));
        assert_eq!(parse_decimal(Some("")), None);
        assert_eq!(parse_decimal(Some("abc")), None);
        assert_eq!(parse_decimal(Some("NaN")), None);
        assert_eq!(parse_decimal(Some("inf")), None);
        assert_eq!(parse_decimal(None), None);
    }

    #[test]
    fn test_zero_is_not_absent() {
        assert_eq!(parse_integer(Some("0")), Some(0));
        assert_eq!(parse_decimal(Some("0")), Some(0.0));
    }

    #[test]
    fn test_integer_parsing() {
        assert_eq!(parse_integer(Some(" 42 ")), Some(42));
        assert_eq!(parse_integer(Some("42.0")), Some(42));
        assert_eq!(parse_integer(Some("42.5")), None);
        assert_eq!(parse_integer(Some("forty")), None);
    }

    #[test]
    fn test_date_forms() {
        let d = parse_date(Some("2024-03-05")).unwrap();
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(d.hour(), 0);

        let d = parse_date(Some("2024-03-05T14:30:00")).unwrap();
        assert_eq!(d.hour(), 14);

        let d = parse_date(Some("2024-03-05 09:15:00")).unwrap();
        assert_eq!(d.minute(), 15);

        let d = parse_date(Some("2024-03-05T23:00:00+05:00")).unwrap();
        assert_eq!(d.hour(), 23);

        let d = parse_date(Some("03/05/2024")).unwrap();
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        assert_eq!(parse_date(Some("not a date")), None);
        assert_eq!(parse_date(Some("")), None);
    }

    #[test]
    fn test_column_map_builds_record() {
        let headers = ["Customer Name", "Age", "Date", "Unknown", "Tags"];
        let map = ColumnMap::from_headers(headers);
        assert_eq!(map.recognized(), 4);

        let row = ["Alice", "x", "2024-01-01", "ignored", " sale "];
        let record = map.to_record(|i| row.get(i).copied());

        assert_eq!(record.customer_name, "Alice");
        assert_eq!(record.age, None);
        assert!(record.date.is_some());
        assert_eq!(record.tags, "sale");
        assert_eq!(record.brand, "");
        assert_eq!(record.quantity, None);
    }

    #[test]
    fn test_column_map_strips_bom() {
        let map = ColumnMap::from_headers(["\u{feff}Customer ID", "Brand"]);
        assert_eq!(map.recognized(), 2);
    }
}
