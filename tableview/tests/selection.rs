use std::sync::Arc;

use tableview::selection::{SelectEnabled, resolve_selection};
use tableview::value::{Row, Value};

fn rows() -> Vec<Row> {
    vec![
        Row::new().set("id", 1i64).set("locked", false),
        Row::new().set("id", 2i64).set("locked", true),
        Row::new().set("id", 3i64).set("locked", false),
    ]
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .map(|r| match r.get_path("id") {
            Some(Value::Int(n)) => *n,
            _ => panic!("row without id"),
        })
        .collect()
}

fn unlocked() -> SelectEnabled {
    Arc::new(|row: &Row| row.get_path("locked") != Some(&Value::Bool(true)))
}

#[test]
fn test_inclusion_picks_listed_keys() {
    let selected = resolve_selection(&rows(), &[Value::Int(1), Value::Int(3)], false, "id", None);
    assert_eq!(ids(&selected), vec![1, 3]);
}

#[test]
fn test_inclusion_with_empty_selection_is_empty() {
    assert!(resolve_selection(&rows(), &[], false, "id", None).is_empty());
}

#[test]
fn test_inclusion_ignores_select_enabled() {
    let enabled = unlocked();
    let selected = resolve_selection(&rows(), &[Value::Int(2)], false, "id", Some(&enabled));
    assert_eq!(ids(&selected), vec![2]);
}

#[test]
fn test_exclusion_with_empty_selection_selects_all() {
    let selected = resolve_selection(&rows(), &[], true, "id", None);
    assert_eq!(ids(&selected), vec![1, 2, 3]);
}

#[test]
fn test_exclusion_removes_listed_keys() {
    let selected = resolve_selection(&rows(), &[Value::Int(2)], true, "id", None);
    assert_eq!(ids(&selected), vec![1, 3]);
}

#[test]
fn test_exclusion_narrows_pool_with_select_enabled() {
    let enabled = unlocked();
    let selected = resolve_selection(&rows(), &[], true, "id", Some(&enabled));
    assert_eq!(ids(&selected), vec![1, 3]);
    let selected = resolve_selection(&rows(), &[Value::Int(1)], true, "id", Some(&enabled));
    assert_eq!(ids(&selected), vec![3]);
}

#[test]
fn test_absent_primary_key_never_matches_selection() {
    let rows = vec![Row::new().set("name", "ghost")];
    assert!(resolve_selection(&rows, &[Value::Int(1)], false, "id", None).is_empty());
    // In exclusion mode the row cannot be excluded either.
    let selected = resolve_selection(&rows, &[Value::Int(1)], true, "id", None);
    assert_eq!(selected.len(), 1);
}

#[test]
fn test_selection_duality() {
    // Without a narrowing predicate, exclusion is the exact complement of
    // inclusion over the same selection set.
    let rows = rows();
    let selection = vec![Value::Int(2), Value::Int(3)];
    let excluded = resolve_selection(&rows, &selection, true, "id", None);
    let included = resolve_selection(&rows, &selection, false, "id", None);
    let complement: Vec<Row> = rows
        .iter()
        .filter(|row| !included.contains(row))
        .cloned()
        .collect();
    assert_eq!(excluded, complement);
}

#[test]
fn test_exact_value_equality_for_keys() {
    // The string "1" does not select the integer 1.
    let selected = resolve_selection(&rows(), &[Value::from("1")], false, "id", None);
    assert!(selected.is_empty());
}
