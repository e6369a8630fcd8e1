//! Column schema: addressable fields and their filter/display behavior.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Optional per-value display hooks for a column.
///
/// Implement this to override how a column's values are presented in the
/// filter-option catalog. Every method defaults to `None`, in which case
/// the catalog falls back to its documented default
/// (`"<header>:<value>"` labels, no title, no class name).
pub trait ValueDisplay: Send + Sync {
    /// Human-readable label for a value.
    fn label(&self, value: &Value) -> Option<String> {
        let _ = value;
        None
    }

    /// Hover/tooltip text for a value.
    fn title(&self, value: &Value) -> Option<String> {
        let _ = value;
        None
    }

    /// Style class for a value.
    fn class_name(&self, value: &Value) -> Option<String> {
        let _ = value;
        None
    }
}

/// Column configuration.
///
/// Columns define the addressable structure of the table: which dotted
/// path a column reads, its header text, and whether it participates in
/// free-text filtering (`filterable`) or offers its distinct values as
/// discrete filter toggles (`taggable`).
///
/// # Examples
///
/// ```
/// use tableview::column::Column;
/// use tableview::value::Value;
///
/// let columns = vec![
///     Column::new("name", "Name").filterable(),
///     Column::new("status", "Status")
///         .taggable()
///         .with_values(vec![Value::from("open"), Value::from("closed")]),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Dotted path this column reads from each row.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether this column participates in free-text filtering.
    pub filterable: bool,
    /// Whether this column's values are offered as discrete filter toggles.
    pub taggable: bool,
    /// Fixed set of allowed values. When present, the filter-option catalog
    /// uses it verbatim instead of scanning rows.
    pub values: Option<Vec<Value>>,
    /// Optional per-value display hooks.
    pub display: Option<Arc<dyn ValueDisplay>>,
}

impl Column {
    /// Create a new column reading `key` and titled `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            filterable: false,
            taggable: false,
            values: None,
            display: None,
        }
    }

    /// Include this column in free-text filtering.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Offer this column's values as discrete filter toggles.
    pub fn taggable(mut self) -> Self {
        self.taggable = true;
        self
    }

    /// Declare the fixed set of values this column can take.
    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }

    /// Attach per-value display hooks.
    pub fn with_display(mut self, display: impl ValueDisplay + 'static) -> Self {
        self.display = Some(Arc::new(display));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("filterable", &self.filterable)
            .field("taggable", &self.taggable)
            .field("values", &self.values)
            .field("display", &self.display.as_ref().map(|_| "…"))
            .finish()
    }
}
