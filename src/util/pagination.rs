//! Pager math for paginated tables.
//!
//! DESIGN
//! ======
//! Pure arithmetic kept out of the page component so the pager behavior is
//! testable without a DOM.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Maximum number of page buttons rendered at once.
const WINDOW: u64 = 7;

/// Total number of pages for a record count, never less than 1.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Page numbers to render as pager buttons.
///
/// A run of up to [`WINDOW`] consecutive pages centered on `current`,
/// clamped so the run never leaves `1..=count`.
pub fn page_window(current: u64, count: u64) -> Vec<u64> {
    let count = count.max(1);
    let half = WINDOW / 2;
    let start = if current > half { current - half } else { 1 };
    let end = (start + WINDOW - 1).min(count);
    let start = if end >= WINDOW { (end - WINDOW + 1).max(1) } else { 1 };
    (start..=end).collect()
}
