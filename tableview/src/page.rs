//! Pagination stage and page-info resolution.

use serde::Deserialize;
use serde::Serialize;

use crate::value::Row;

/// Sentinel page size meaning "show all rows on one page".
pub const PAGE_SIZE_ALL: i64 = -1;

/// Resolved page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page index, zero-based.
    pub page: usize,
    /// Rows per page; [`PAGE_SIZE_ALL`] disables paging.
    pub page_size: i64,
    /// Total number of pages, at least 1.
    pub page_count: usize,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZE_ALL,
            page_count: 1,
        }
    }
}

/// Compute page metadata from the filtered row count.
///
/// A non-positive `page_size` is the "show all" mode: one page, and the
/// incoming `page` passes through unclamped since page validity does not
/// matter without paging. Otherwise `page_count` is
/// `ceil(len / page_size)` with a minimum of 1, and an out-of-range `page`
/// is clamped down to the last page. Clamping down (never up) keeps a page
/// index valid when a narrowing filter shrinks the data under it, instead
/// of rendering an empty page.
pub fn resolve_page_info(page: usize, page_size: i64, filtered: &[Row]) -> PageInfo {
    if page_size < 1 {
        return PageInfo {
            page,
            page_size,
            page_count: 1,
        };
    }
    let size = page_size as usize;
    let page_count = filtered.len().div_ceil(size).max(1);
    PageInfo {
        page: page.min(page_count - 1),
        page_size,
        page_count,
    }
}

/// Slice one page out of the ordered rows.
///
/// A non-positive page size returns a copy of all rows. The slice is
/// clamped to the array bounds, so a page running past the end yields the
/// remaining rows rather than an error.
pub fn paginate(rows: &[Row], info: &PageInfo) -> Vec<Row> {
    if info.page_size < 1 {
        return rows.to_vec();
    }
    let size = info.page_size as usize;
    let start = info.page.saturating_mul(size).min(rows.len());
    let end = (start + size).min(rows.len());
    rows[start..end].to_vec()
}
