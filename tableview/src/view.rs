//! Per-table view state, the derivation graph, and the namespace registry.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use crate::column::Column;
use crate::filter::{Filter, filter_rows};
use crate::memo::Memo;
use crate::options::{FilterOption, extract_filter_options};
use crate::page::{PAGE_SIZE_ALL, PageInfo, paginate, resolve_page_info};
use crate::selection::{SelectEnabled, resolve_selection};
use crate::sort::{SortInfo, sort_rows};
use crate::value::{Row, Value};

// =============================================================================
// TableState
// =============================================================================

/// The full view configuration of one table instance.
///
/// Every field is mutated externally between derivations; the derivation
/// graph only reads it and produces derived snapshots. Shared collections
/// are `Arc`s so the graph can key its caches on pointer identity — replace
/// the `Arc` to signal a change, mutate nothing in place.
#[derive(Clone)]
pub struct TableState {
    /// The raw row collection.
    pub rows: Arc<Vec<Row>>,
    /// Column schema.
    pub columns: Arc<Vec<Column>>,
    /// Active filters.
    pub filters: Arc<Vec<Filter>>,
    /// Current page index, zero-based.
    pub page: usize,
    /// Rows per page; [`PAGE_SIZE_ALL`] disables paging.
    pub page_size: i64,
    /// Sort configuration.
    pub sort: SortInfo,
    /// Primary-key values driving selection. Mode-dependent meaning: an
    /// exclusion list when `select_all` is set, an inclusion list otherwise.
    pub user_selection: Arc<Vec<Value>>,
    /// Selection mode toggle. See [`resolve_selection`].
    pub select_all: bool,
    /// Dotted path of the primary key.
    pub primary_key: String,
    /// Optional predicate narrowing the selectable pool in exclusion mode.
    pub select_enabled: Option<SelectEnabled>,
}

impl TableState {
    /// Create a state over `rows` and `columns` with no filters, no sort,
    /// paging disabled, and an empty inclusion-mode selection keyed by
    /// `"id"`.
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Self {
        Self {
            rows: Arc::new(rows),
            columns: Arc::new(columns),
            filters: Arc::new(Vec::new()),
            page: 0,
            page_size: PAGE_SIZE_ALL,
            sort: SortInfo::default(),
            user_selection: Arc::new(Vec::new()),
            select_all: false,
            primary_key: "id".to_string(),
            select_enabled: None,
        }
    }

    /// Set the primary-key path, consuming and returning the state.
    pub fn with_primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = key.into();
        self
    }

    /// Replace the raw rows.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = Arc::new(rows);
    }

    /// Replace the active filters.
    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = Arc::new(filters);
    }

    /// Replace the selection set.
    pub fn set_user_selection(&mut self, selection: Vec<Value>) {
        self.user_selection = Arc::new(selection);
    }
}

// =============================================================================
// TableView — the derivation graph
// =============================================================================

/// The memoized derivation graph of one table namespace.
///
/// Each derived output is a pure function of a fixed list of upstream
/// inputs; its [`Memo`] cell returns the cached output when none of those
/// inputs changed by identity. One `TableView` exists per namespace for the
/// namespace's whole lifetime — it is built by [`Tables::init`] exactly
/// once, never per access, since a graph rebuilt on every read caches
/// nothing.
#[derive(Default)]
pub struct TableView {
    filtered: Memo<(Arc<Vec<Row>>, Arc<Vec<Filter>>, Arc<Vec<Column>>), Arc<Vec<Row>>>,
    sorted: Memo<(Arc<Vec<Row>>, SortInfo), Arc<Vec<Row>>>,
    page_info: Memo<(usize, i64, Arc<Vec<Row>>), PageInfo>,
    visible: Memo<(Arc<Vec<Row>>, PageInfo), Arc<Vec<Row>>>,
    selected: Memo<
        (
            Arc<Vec<Row>>,
            Arc<Vec<Value>>,
            bool,
            String,
            Option<SelectEnabled>,
        ),
        Arc<Vec<Row>>,
    >,
    options: Memo<(Arc<Vec<Row>>, Arc<Vec<Column>>), Arc<Vec<FilterOption>>>,
}

impl TableView {
    /// Create a graph with every cache empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows surviving the active filters, in original order.
    pub fn filtered_rows(&mut self, state: &TableState) -> Arc<Vec<Row>> {
        self.filtered.get_or_recompute(
            (
                Arc::clone(&state.rows),
                Arc::clone(&state.filters),
                Arc::clone(&state.columns),
            ),
            |(rows, filters, columns)| {
                trace!("filter: recomputing over {} rows", rows.len());
                Arc::new(filter_rows(rows, filters, columns))
            },
        )
    }

    /// Filtered rows ordered by the sort configuration.
    pub fn sorted_rows(&mut self, state: &TableState) -> Arc<Vec<Row>> {
        let filtered = self.filtered_rows(state);
        self.sorted
            .get_or_recompute((filtered, state.sort.clone()), |(rows, sort)| {
                trace!("sort: recomputing, key {:?}", sort.sort_key);
                Arc::new(sort_rows(rows, sort))
            })
    }

    /// Page metadata resolved (and clamped) against the filtered row count.
    pub fn page_info(&mut self, state: &TableState) -> PageInfo {
        let filtered = self.filtered_rows(state);
        self.page_info.get_or_recompute(
            (state.page, state.page_size, filtered),
            |(page, page_size, rows)| resolve_page_info(*page, *page_size, rows),
        )
    }

    /// The visible rows: filtered, sorted, and sliced to the current page.
    pub fn visible_rows(&mut self, state: &TableState) -> Arc<Vec<Row>> {
        let sorted = self.sorted_rows(state);
        let info = self.page_info(state);
        self.visible
            .get_or_recompute((sorted, info), |(rows, info)| {
                trace!("paginate: recomputing page {}/{}", info.page, info.page_count);
                Arc::new(paginate(rows, info))
            })
    }

    /// The filtered rows currently selected.
    pub fn selected_rows(&mut self, state: &TableState) -> Arc<Vec<Row>> {
        let filtered = self.filtered_rows(state);
        self.selected.get_or_recompute(
            (
                filtered,
                Arc::clone(&state.user_selection),
                state.select_all,
                state.primary_key.clone(),
                state.select_enabled.clone(),
            ),
            |(rows, selection, select_all, primary_key, enabled)| {
                trace!("selection: recomputing, select_all {select_all}");
                Arc::new(resolve_selection(
                    rows,
                    selection,
                    *select_all,
                    primary_key,
                    enabled.as_ref(),
                ))
            },
        )
    }

    /// The catalog of selectable value-filter toggles, over the raw rows.
    pub fn filter_options(&mut self, state: &TableState) -> Arc<Vec<FilterOption>> {
        self.options.get_or_recompute(
            (Arc::clone(&state.rows), Arc::clone(&state.columns)),
            |(rows, columns)| {
                trace!("options: recomputing catalog");
                Arc::new(extract_filter_options(rows, columns))
            },
        )
    }
}

// =============================================================================
// Tables — namespace registry
// =============================================================================

struct TableEntry {
    state: TableState,
    view: TableView,
}

/// Registry of table namespaces.
///
/// Each namespace owns its state and its own derivation graph, so two
/// differently-configured tables never share cached results. Accessors
/// return `None` for a namespace that was never initialized — callers can
/// tell "no table" apart from "a table with no rows".
#[derive(Default)]
pub struct Tables {
    entries: HashMap<String, TableEntry>,
}

impl Tables {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize a namespace, building its derivation graph.
    ///
    /// Re-initializing an existing namespace replaces both its state and
    /// its graph (all caches start cold).
    pub fn init(&mut self, namespace: impl Into<String>, state: TableState) {
        let namespace = namespace.into();
        debug!("table '{namespace}': initialized with {} rows", state.rows.len());
        self.entries.insert(
            namespace,
            TableEntry {
                state,
                view: TableView::new(),
            },
        );
    }

    /// Tear down a namespace. Returns `false` if it was never initialized.
    pub fn remove(&mut self, namespace: &str) -> bool {
        self.entries.remove(namespace).is_some()
    }

    /// Whether a namespace has been initialized.
    pub fn is_initialized(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    /// Read a namespace's state.
    pub fn state(&self, namespace: &str) -> Option<&TableState> {
        self.entries.get(namespace).map(|e| &e.state)
    }

    /// Mutable access to a namespace's state for the external update layer.
    pub fn state_mut(&mut self, namespace: &str) -> Option<&mut TableState> {
        self.entries.get_mut(namespace).map(|e| &mut e.state)
    }

    // -------------------------------------------------------------------------
    // Passthrough accessors
    // -------------------------------------------------------------------------

    /// Raw rows of a namespace.
    pub fn rows(&self, namespace: &str) -> Option<Arc<Vec<Row>>> {
        self.state(namespace).map(|s| Arc::clone(&s.rows))
    }

    /// Column schema of a namespace.
    pub fn columns(&self, namespace: &str) -> Option<Arc<Vec<Column>>> {
        self.state(namespace).map(|s| Arc::clone(&s.columns))
    }

    /// Active filters of a namespace.
    pub fn filters(&self, namespace: &str) -> Option<Arc<Vec<Filter>>> {
        self.state(namespace).map(|s| Arc::clone(&s.filters))
    }

    /// Sort configuration of a namespace.
    pub fn sort_info(&self, namespace: &str) -> Option<SortInfo> {
        self.state(namespace).map(|s| s.sort.clone())
    }

    /// Selection mode toggle of a namespace.
    pub fn select_all(&self, namespace: &str) -> Option<bool> {
        self.state(namespace).map(|s| s.select_all)
    }

    /// Primary-key path of a namespace.
    pub fn primary_key(&self, namespace: &str) -> Option<String> {
        self.state(namespace).map(|s| s.primary_key.clone())
    }

    // -------------------------------------------------------------------------
    // Derived accessors
    // -------------------------------------------------------------------------

    /// Resolved page metadata of a namespace.
    pub fn page_info(&mut self, namespace: &str) -> Option<PageInfo> {
        let TableEntry { state, view } = self.entries.get_mut(namespace)?;
        Some(view.page_info(state))
    }

    /// Visible rows (filtered, sorted, paginated) of a namespace.
    pub fn visible_rows(&mut self, namespace: &str) -> Option<Arc<Vec<Row>>> {
        let TableEntry { state, view } = self.entries.get_mut(namespace)?;
        Some(view.visible_rows(state))
    }

    /// Selected rows of a namespace.
    pub fn selected_rows(&mut self, namespace: &str) -> Option<Arc<Vec<Row>>> {
        let TableEntry { state, view } = self.entries.get_mut(namespace)?;
        Some(view.selected_rows(state))
    }

    /// Filter-option catalog of a namespace.
    pub fn filter_options(&mut self, namespace: &str) -> Option<Arc<Vec<FilterOption>>> {
        let TableEntry { state, view } = self.entries.get_mut(namespace)?;
        Some(view.filter_options(state))
    }
}
