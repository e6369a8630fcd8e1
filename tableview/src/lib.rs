//! Derived, presentable views of client-held tabular data.
//!
//! This crate computes the visible subset of a table — filtered, sorted,
//! paginated, and annotated with row-selection state — from a raw row
//! collection plus mutable view configuration. It is meant to sit under a
//! UI state layer that recomputes the view whenever part of the
//! configuration changes; single-slot, identity-keyed memoization keeps
//! those recomputations cheap.
//!
//! The pipeline stages ([`filter::filter_rows`], [`sort::sort_rows`],
//! [`page::paginate`], [`selection::resolve_selection`],
//! [`options::extract_filter_options`]) are plain pure functions. The
//! [`view::TableView`] derivation graph glues them together with caching,
//! and the [`view::Tables`] registry isolates one graph per table
//! namespace.
//!
//! Everything here is synchronous and total: absent fields resolve to an
//! in-band sentinel, invalid page indices self-correct by clamping, and no
//! stage raises an error.

pub mod column;
pub mod filter;
pub mod memo;
pub mod options;
pub mod page;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;

pub mod prelude {
    pub use crate::column::{Column, ValueDisplay};
    pub use crate::filter::{Filter, filter_rows};
    pub use crate::memo::{InputKey, Memo};
    pub use crate::options::{FilterOption, extract_filter_options};
    pub use crate::page::{PAGE_SIZE_ALL, PageInfo, paginate, resolve_page_info};
    pub use crate::selection::{SelectEnabled, resolve_selection};
    pub use crate::sort::{SortDirection, SortInfo, compare_values, sort_rows};
    pub use crate::value::{ABSENT_TEXT, Row, Value};
    pub use crate::view::{TableState, TableView, Tables};
}
