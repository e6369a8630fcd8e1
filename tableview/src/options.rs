//! Filter-option catalog: the pool of selectable value-filter toggles.

use crate::column::Column;
use crate::filter::Filter;
use crate::value::{Row, Value};

/// One selectable value-filter toggle in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    /// Key of the column this option filters.
    pub key: String,
    /// Display label, e.g. `"Status:open"`.
    pub label: String,
    /// The value the toggle filters for.
    pub value: Value,
    /// Optional hover text from the column's display hooks.
    pub title: Option<String>,
    /// Optional style class from the column's display hooks.
    pub class_name: Option<String>,
}

impl FilterOption {
    /// The value filter this option represents when toggled on.
    pub fn to_filter(&self) -> Filter {
        Filter::Value {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// Build the filter-option catalog for every taggable column.
///
/// A column with a declared `values` list contributes it verbatim; other
/// taggable columns contribute the distinct values observed across `rows`
/// in first-seen order. The catalog is always computed over the full raw
/// dataset, not the filtered one, so it does not shrink as filters are
/// applied.
///
/// Labels come from the column's [`ValueDisplay`](crate::column::ValueDisplay)
/// hook when present; otherwise booleans label as `"<header>:<Yes|No>"` and
/// everything else as `"<header>:<value>"`.
pub fn extract_filter_options(rows: &[Row], columns: &[Column]) -> Vec<FilterOption> {
    let mut catalog = Vec::new();
    for column in columns.iter().filter(|c| c.taggable) {
        match &column.values {
            Some(declared) => {
                for value in declared {
                    catalog.push(make_option(column, value.clone()));
                }
            }
            None => {
                let mut seen: Vec<Value> = Vec::new();
                for row in rows {
                    if let Some(value) = row.get_path(&column.key)
                        && !seen.contains(value)
                    {
                        seen.push(value.clone());
                    }
                }
                for value in seen {
                    catalog.push(make_option(column, value));
                }
            }
        }
    }
    catalog
}

fn make_option(column: &Column, value: Value) -> FilterOption {
    let display = column.display.as_deref();
    let label = display
        .and_then(|d| d.label(&value))
        .unwrap_or_else(|| match &value {
            Value::Bool(b) => {
                format!("{}:{}", column.header, if *b { "Yes" } else { "No" })
            }
            other => format!("{}:{}", column.header, other),
        });
    FilterOption {
        key: column.key.clone(),
        label,
        title: display.and_then(|d| d.title(&value)),
        class_name: display.and_then(|d| d.class_name(&value)),
        value,
    }
}
