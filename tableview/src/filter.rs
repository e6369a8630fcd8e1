//! Filter stage: reduces raw rows by text and value predicates.

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::value::{Row, Value};

/// An active filter.
///
/// Text filters match case-insensitively against the stringified values of
/// every filterable column; value filters match one taggable column by
/// exact equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    /// Case-insensitive substring match over all filterable columns.
    Text {
        /// The substring to search for.
        value: String,
    },
    /// Exact match against one taggable column.
    Value {
        /// Key of the targeted column.
        key: String,
        /// Value the row must hold at that key.
        value: Value,
    },
}

impl Filter {
    /// Create a text filter.
    pub fn text(value: impl Into<String>) -> Self {
        Filter::Text {
            value: value.into(),
        }
    }

    /// Create a value filter targeting `key`.
    pub fn value(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Value {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Apply the active filters to `rows`.
///
/// An empty filter list returns a shallow copy of `rows` — callers must not
/// assume shared backing storage. Otherwise two AND-combined passes run:
/// every text filter must match at least one filterable column, and every
/// value filter must either miss a taggable column or equal the row's value
/// at it exactly. Relative row order is preserved.
pub fn filter_rows(rows: &[Row], filters: &[Filter], columns: &[Column]) -> Vec<Row> {
    if filters.is_empty() {
        return rows.to_vec();
    }

    let text_needles: Vec<String> = filters
        .iter()
        .filter_map(|f| match f {
            Filter::Text { value } => Some(value.to_lowercase()),
            Filter::Value { .. } => None,
        })
        .collect();
    let value_filters: Vec<(&str, &Value)> = filters
        .iter()
        .filter_map(|f| match f {
            Filter::Value { key, value } => Some((key.as_str(), value)),
            Filter::Text { .. } => None,
        })
        .collect();

    rows.iter()
        .filter(|row| row_matches_text(row, &text_needles, columns))
        .filter(|row| row_matches_values(row, &value_filters, columns))
        .cloned()
        .collect()
}

/// Text pass: every needle must appear in at least one filterable column.
///
/// Absent values stringify to the fixed placeholder, so matching stays
/// total over rows with missing fields.
fn row_matches_text(row: &Row, needles: &[String], columns: &[Column]) -> bool {
    needles.iter().all(|needle| {
        columns
            .iter()
            .filter(|c| c.filterable)
            .any(|c| row.text_at(&c.key).to_lowercase().contains(needle.as_str()))
    })
}

/// Value pass: every value filter must miss the column or match exactly.
///
/// Absent values compare unequal to every concrete filter value, dropping
/// the row.
fn row_matches_values(row: &Row, filters: &[(&str, &Value)], columns: &[Column]) -> bool {
    columns.iter().filter(|c| c.taggable).all(|column| {
        filters.iter().all(|(key, expected)| {
            *key != column.key || row.get_path(&column.key) == Some(*expected)
        })
    })
}
