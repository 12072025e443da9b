//! Pagination parameter normalization
//!
//! Callers may send absent, zero, negative or absurdly large page values.
//! Nothing here rejects input: every pair is coerced into a valid one.

/// Page size applied when the caller supplies a non-positive value
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Normalize raw pagination input into effective values.
///
/// The page is clamped to a minimum of 1 and has no upper bound (an
/// out-of-range page simply yields an empty item list upstream). The page
/// size falls back to [`DEFAULT_PAGE_SIZE`] when non-positive and is capped
/// at `max_page_size`.
///
/// Total and idempotent: every input maps to a valid output, and
/// normalizing an already-normalized pair is a no-op.
pub fn normalize(page: i64, page_size: i64, max_page_size: i64) -> (i64, i64) {
    let page = if page < 1 { 1 } else { page };
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size.min(max_page_size)
    };
    (page, page_size)
}

/// Offset into the full result set for an effective `(page, page_size)` pair
pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1).saturating_mul(page_size)
}
