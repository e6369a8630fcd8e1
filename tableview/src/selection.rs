//! Selection resolution over filtered rows.
//!
//! Selection is tracked by primary-key values so it stays stable while rows
//! are filtered, sorted, and paged. Two exclusive modes exist, chosen by
//! `select_all`:
//!
//! - **Exclusion** (`select_all = true`): everything in the selectable pool
//!   is selected except the keys listed in `user_selection`.
//! - **Inclusion** (`select_all = false`): exactly the rows whose key is
//!   listed in `user_selection` are selected.
//!
//! Flipping `select_all` deliberately does not clear `user_selection`; the
//! set's meaning is mode-dependent, which makes the select-all toggle cheap
//! for the caller.

use std::sync::Arc;

use crate::value::{Row, Value};

/// Predicate narrowing which filtered rows are eligible for selection at
/// all. Only consulted in exclusion mode.
pub type SelectEnabled = Arc<dyn Fn(&Row) -> bool + Send + Sync>;

/// Resolve which of the filtered rows are selected.
///
/// Never inspects rows outside `filtered`. Membership in `user_selection`
/// is exact [`Value`] equality on the row's value at `primary_key`; rows
/// with an absent primary key match no selection entry.
pub fn resolve_selection(
    filtered: &[Row],
    user_selection: &[Value],
    select_all: bool,
    primary_key: &str,
    select_enabled: Option<&SelectEnabled>,
) -> Vec<Row> {
    if select_all {
        let pool = filtered
            .iter()
            .filter(|row| select_enabled.is_none_or(|enabled| enabled(row)));
        if user_selection.is_empty() {
            return pool.cloned().collect();
        }
        pool.filter(|row| !key_selected(row, primary_key, user_selection))
            .cloned()
            .collect()
    } else {
        filtered
            .iter()
            .filter(|row| key_selected(row, primary_key, user_selection))
            .cloned()
            .collect()
    }
}

fn key_selected(row: &Row, primary_key: &str, selection: &[Value]) -> bool {
    row.get_path(primary_key)
        .map(|key| selection.contains(key))
        .unwrap_or(false)
}
