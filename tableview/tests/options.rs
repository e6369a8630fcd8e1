use tableview::column::{Column, ValueDisplay};
use tableview::filter::{Filter, filter_rows};
use tableview::options::extract_filter_options;
use tableview::value::{Row, Value};

fn rows() -> Vec<Row> {
    vec![
        Row::new().set("status", "open").set("urgent", true),
        Row::new().set("status", "closed").set("urgent", false),
        Row::new().set("status", "open").set("urgent", true),
    ]
}

#[test]
fn test_observed_values_distinct_in_first_seen_order() {
    let cols = vec![Column::new("status", "Status").taggable()];
    let catalog = extract_filter_options(&rows(), &cols);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].value, Value::from("open"));
    assert_eq!(catalog[1].value, Value::from("closed"));
}

#[test]
fn test_declared_values_used_verbatim() {
    // Declared values win even when the rows never show some of them.
    let cols = vec![
        Column::new("status", "Status")
            .taggable()
            .with_values(vec![Value::from("archived"), Value::from("open")]),
    ];
    let catalog = extract_filter_options(&rows(), &cols);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].value, Value::from("archived"));
}

#[test]
fn test_non_taggable_columns_are_skipped() {
    let cols = vec![Column::new("status", "Status").filterable()];
    assert!(extract_filter_options(&rows(), &cols).is_empty());
}

#[test]
fn test_default_labels() {
    let cols = vec![
        Column::new("status", "Status").taggable(),
        Column::new("urgent", "Urgent").taggable(),
    ];
    let catalog = extract_filter_options(&rows(), &cols);
    let labels: Vec<&str> = catalog.iter().map(|o| o.label.as_str()).collect();
    assert!(labels.contains(&"Status:open"));
    assert!(labels.contains(&"Urgent:Yes"));
    assert!(labels.contains(&"Urgent:No"));
}

struct StatusDisplay;

impl ValueDisplay for StatusDisplay {
    fn label(&self, value: &Value) -> Option<String> {
        Some(format!("is {value}"))
    }

    fn class_name(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(s) if s == "open" => Some("tag-open".to_string()),
            _ => None,
        }
    }
}

#[test]
fn test_display_hooks_override_defaults() {
    let cols = vec![Column::new("status", "Status").taggable().with_display(StatusDisplay)];
    let catalog = extract_filter_options(&rows(), &cols);
    assert_eq!(catalog[0].label, "is open");
    assert_eq!(catalog[0].class_name.as_deref(), Some("tag-open"));
    assert_eq!(catalog[0].title, None);
    assert_eq!(catalog[1].class_name, None);
}

#[test]
fn test_catalog_does_not_shrink_under_filters() {
    // Options are extracted from the raw dataset, so applying one of them
    // must not narrow the catalog itself.
    let cols = vec![Column::new("status", "Status").taggable()];
    let full = extract_filter_options(&rows(), &cols);
    let option_filter = full[1].to_filter();
    let filtered = filter_rows(&rows(), &[option_filter], &cols);
    assert_eq!(filtered.len(), 1);
    let catalog_again = extract_filter_options(&rows(), &cols);
    assert_eq!(catalog_again, full);
}

#[test]
fn test_option_converts_to_value_filter() {
    let cols = vec![Column::new("status", "Status").taggable()];
    let catalog = extract_filter_options(&rows(), &cols);
    assert_eq!(
        catalog[0].to_filter(),
        Filter::value("status", "open"),
    );
}
