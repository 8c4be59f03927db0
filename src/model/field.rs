//! Field values and the row abstraction shared by every table view
//!
//! Each view declares a concrete record struct; the query engine only ever
//! sees records through the `TableRow` trait, which exposes named fields as
//! `FieldValue` scalars.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt;

/// A single scalar cell value.
///
/// Values of the same kind order naturally; values of different kinds do not
/// order at all (the engine treats that as a tie and leaves the relative
/// order alone).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// Natural ordering within a kind, `None` across kinds (and for float
    /// values that do not order).
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.cmp(b)),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.partial_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.format("%b %-d, %Y")),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// A record that can back a table view.
///
/// `field` returns `None` for keys the record does not carry; the engine
/// degrades gracefully on such keys (no match for filters, no reordering for
/// sorts).
pub trait TableRow {
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// String form of a field, empty when absent. Used for search, detail
    /// popups and CSV export.
    fn display(&self, key: &str) -> String {
        self.field(key).map(|v| v.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_ordering() {
        let a = FieldValue::Text("alpha".to_string());
        let b = FieldValue::Text("beta".to_string());
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        let x = FieldValue::Number(10);
        let y = FieldValue::Number(2);
        assert_eq!(x.compare(&y), Some(Ordering::Greater));
    }

    #[test]
    fn test_cross_kind_is_unordered() {
        let a = FieldValue::Text("1".to_string());
        let b = FieldValue::Number(1);
        assert_eq!(a.compare(&b), None);
        assert_eq!(FieldValue::Float(1.0).compare(&b), None);
    }

    #[test]
    fn test_float_ordering_and_display() {
        let a = FieldValue::Float(98.5);
        let b = FieldValue::Float(99.1);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert_eq!(a.to_string(), "98.5");
        assert_eq!(FieldValue::Float(0.0).to_string(), "0");
    }

    #[test]
    fn test_date_display() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(FieldValue::Date(d).to_string(), "Jun 5, 2023");
    }
}
