//! Page-index to cursor translation.
//!
//! The backend pages by keyset (`id > cursor`), the paginator thinks in
//! zero-based page indices. Adjacent moves shift the cursor by one page size;
//! page 0 and the last page are reached directly. Jumping to an arbitrary
//! middle page is not supported.

use serde::Deserialize;

/// Event emitted by the paginator when the user navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChange {
    pub page_index: u32,
    pub previous_page_index: u32,
    pub page_size: u32,
}

impl PageChange {
    pub fn new(page_index: u32, previous_page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            previous_page_index,
            page_size,
        }
    }
}

/// Number of pages needed for `total_records`. Zero records means zero pages.
pub fn page_count(total_records: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(u64::from(page_size))
}

/// Whether `page_index` is the final page for `total_records`.
pub fn is_last_page(page_index: u32, page_size: u32, total_records: u64) -> bool {
    let pages = page_count(total_records, page_size);
    pages > 0 && u64::from(page_index) == pages - 1
}

/// Cursor for the last page.
///
/// Assumes ids are assigned densely from 1 in creation order, so the last
/// record of page `n - 1` has id `n * page_size`. Deleted records or id gaps
/// break this; replace with a server-computed offset if the backend grows one.
pub fn last_page_cursor(page_index: u32, page_size: u32) -> i64 {
    i64::from(page_index) * i64::from(page_size)
}

/// Cursor to request for a paginator move. Pure; may return a negative value,
/// see [`clamp_cursor`].
pub fn compute_next_cursor(
    requested_page_index: u32,
    previous_page_index: u32,
    page_size: u32,
    prior_cursor: i64,
    total_records: u64,
) -> i64 {
    if requested_page_index == 0 {
        0
    } else if is_last_page(requested_page_index, page_size, total_records) {
        last_page_cursor(requested_page_index, page_size)
    } else if requested_page_index > previous_page_index {
        prior_cursor + i64::from(page_size)
    } else if requested_page_index < previous_page_index {
        prior_cursor - i64::from(page_size)
    } else {
        prior_cursor
    }
}

/// Cursors below zero mean "before the first record".
pub fn clamp_cursor(cursor: i64) -> i64 {
    cursor.max(0)
}
