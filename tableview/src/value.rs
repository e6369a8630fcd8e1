//! Dynamic cell values and keyed row records.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Placeholder used when an absent value must be rendered as text.
///
/// Text filtering matches against stringified cell values; a missing field
/// still has to produce a stable string so substring matching stays total.
pub const ABSENT_TEXT: &str = "undefined";

/// A dynamic value stored in a row field.
///
/// Rows are schemaless, so every cell is one of these variants. Nested
/// records are addressable through dotted paths (see [`Row::get_path`]).
///
/// # Example
///
/// ```
/// use tableview::value::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let active = Value::from(true);
/// assert_eq!(name.to_string(), "Contoso");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null. Distinct from an absent field.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested record, reachable through dotted paths.
    Record(Row),
}

impl Value {
    /// Returns `true` if this is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Record(_) => write!(f, "[record]"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Row> for Value {
    fn from(value: Row) -> Self {
        Value::Record(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut row = Row::new();
                for (key, item) in map {
                    row.fields.insert(key, Value::from(item));
                }
                Value::Record(row)
            }
        }
    }
}

/// One record of a tabular dataset.
///
/// Rows hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. Fields are addressed by dotted paths; lookups are
/// total and yield an absent value (`None`) for missing paths rather than
/// an error.
///
/// # Example
///
/// ```
/// use tableview::value::Row;
///
/// let row = Row::new().set("name", "Contoso").set("owner.id", 7i64);
/// assert!(row.get_path("name").is_some());
/// assert!(row.get_path("missing.field").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, consuming and returning the row.
    ///
    /// A dotted `key` creates the intermediate nested records.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Inserts a field value in place, creating nested records for dotted keys.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        match key.split_once('.') {
            None => {
                self.fields.insert(key.to_string(), value.into());
            }
            Some((head, rest)) => {
                let nested = self
                    .fields
                    .entry(head.to_string())
                    .or_insert_with(|| Value::Record(Row::new()));
                if !matches!(nested, Value::Record(_)) {
                    *nested = Value::Record(Row::new());
                }
                if let Value::Record(inner) = nested {
                    inner.insert(rest, value);
                }
            }
        }
    }

    /// Returns the value at a direct (non-dotted) field key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Resolves a dotted path, tolerant of absence.
    ///
    /// Returns `None` when any segment is missing or an intermediate value
    /// is not a record. Never fails.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let value = current.fields.get(segment)?;
            if segments.peek().is_none() {
                return Some(value);
            }
            match value {
                Value::Record(inner) => current = inner,
                _ => return None,
            }
        }
        None
    }

    /// Stringifies the value at a dotted path for text matching.
    ///
    /// Absent paths yield [`ABSENT_TEXT`] so substring matching never has
    /// to special-case missing fields.
    pub fn text_at(&self, path: &str) -> String {
        match self.get_path(path) {
            Some(value) => value.to_string(),
            None => ABSENT_TEXT.to_string(),
        }
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Builds a row from a JSON object.
    ///
    /// Returns `None` for non-object JSON values.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match Value::from(value) {
            Value::Record(row) => Some(row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_set_and_get() {
        let row = Row::new().set("owner.name", "a").set("id", 1i64);
        assert_eq!(row.get_path("owner.name"), Some(&Value::from("a")));
        assert_eq!(row.get_path("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn missing_paths_are_absent_not_errors() {
        let row = Row::new().set("id", 1i64);
        assert_eq!(row.get_path("missing"), None);
        assert_eq!(row.get_path("id.nested"), None);
        assert_eq!(row.get_path("missing.deeper.still"), None);
    }

    #[test]
    fn absent_stringifies_to_placeholder() {
        let row = Row::new();
        assert_eq!(row.text_at("anything"), ABSENT_TEXT);
    }

    #[test]
    fn from_json_object() {
        let json = serde_json::json!({"id": 2, "name": "b", "tags": ["x", "y"], "meta": {"ok": true}});
        let row = Row::from_json(json).unwrap();
        assert_eq!(row.get_path("id"), Some(&Value::Int(2)));
        assert_eq!(row.get_path("meta.ok"), Some(&Value::Bool(true)));
        assert_eq!(row.text_at("tags"), "x,y");
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(Row::from_json(serde_json::json!([1, 2])).is_none());
    }
}
