//! Sort stage: orders rows by a configurable key and direction.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::value::{Row, Value};

/// Sort direction.
///
/// `Descending` is the default: with no direction configured the sort
/// places higher values first. Only the exact string `"asc"` deserializes
/// to `Ascending`; any other string (or a missing direction) means
/// descending. Downstream consumers rely on this default, so it is kept
/// as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortDirection {
    /// Lower values first.
    Ascending,
    /// Higher values first.
    #[default]
    Descending,
}

impl From<String> for SortDirection {
    fn from(value: String) -> Self {
        SortDirection::from(value.as_str())
    }
}

impl From<&str> for SortDirection {
    fn from(value: &str) -> Self {
        if value == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

impl From<SortDirection> for String {
    fn from(value: SortDirection) -> Self {
        match value {
            SortDirection::Ascending => "asc".to_string(),
            SortDirection::Descending => "desc".to_string(),
        }
    }
}

/// Sort configuration: which dotted path to order by, and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortInfo {
    /// Dotted path of the sort key. `None` keeps the original order.
    pub sort_key: Option<String>,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortInfo {
    /// Create a sort over `key` in the default (descending) direction.
    pub fn by(key: impl Into<String>) -> Self {
        Self {
            sort_key: Some(key.into()),
            direction: SortDirection::default(),
        }
    }

    /// Toggle sorting on a column key.
    ///
    /// Toggling the current key flips the direction; toggling a different
    /// key switches to it in the default direction.
    pub fn toggle(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = Some(key.to_string());
            self.direction = SortDirection::default();
        }
    }
}

/// Generic ordering over dynamic values.
///
/// Numbers compare numerically (across `Int` and `Float`), strings
/// lexicographically, booleans as `false < true`. Absent values and
/// mismatched types tie, so they keep their relative input order under the
/// stable sort.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Int(a)), Some(Value::Int(b))) => a.cmp(b),
        (Some(Value::Float(a)), Some(Value::Float(b))) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Int(a)), Some(Value::Float(b))) => {
            (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Float(a)), Some(Value::Int(b))) => {
            a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Order `rows` by the configured sort key, returning a new vec.
///
/// With no sort key this is a copy in original order. The sort is stable:
/// rows with equal keys keep their relative input order.
pub fn sort_rows(rows: &[Row], sort: &SortInfo) -> Vec<Row> {
    let mut out = rows.to_vec();
    let Some(key) = sort.sort_key.as_deref() else {
        return out;
    };
    out.sort_by(|a, b| {
        let natural = compare_values(a.get_path(key), b.get_path(key));
        match sort.direction {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    });
    out
}
