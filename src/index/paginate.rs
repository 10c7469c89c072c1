//! Fixed-size pagination over an ordered list.
//!
//! Splits a list into consecutive chunks and attaches 1-based navigation
//! numbers (`first`/`prev`/`next`/`last`) to each chunk.

/// Page size used when the configured limit is zero.
pub const DEFAULT_PER_PAGE: usize = 10;

/// One unit of pagination: a chunk of items plus navigation numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// 1-based page number
    pub num: usize,
    /// Always 1
    pub first: usize,
    /// Total page count
    pub last: usize,
    /// Previous page number (page 1 points at itself)
    pub prev: usize,
    /// Next page number (the last page points at the total)
    pub next: usize,
    /// Items on this page, in original list order
    pub items: Vec<T>,
}

/// Partition `list` into pages of at most `limit` items.
///
/// A `limit` of zero falls back to [`DEFAULT_PER_PAGE`]. The total page
/// count is `round(total / limit)` — rounding, not ceiling division. This
/// is a compatibility quirk of the original index generator: with awkward
/// limits the computed `last` can disagree with the number of chunks
/// actually produced (e.g. 5 items with limit 4 yields two chunks but
/// `last == 1`). Kept verbatim so generated navigation stays byte-stable.
pub fn paginate<T: Clone>(list: &[T], limit: usize) -> Vec<Page<T>> {
    let limit = if limit == 0 { DEFAULT_PER_PAGE } else { limit };
    let total = list.len();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max = (total as f64 / limit as f64).round() as usize;

    let mut pages = Vec::new();
    let mut num = 1;
    let mut i = 0;
    while i < total {
        let end = usize::min(i + limit, total);
        pages.push(Page {
            num,
            first: 1,
            last: max,
            prev: if num == 1 { 1 } else { num - 1 },
            next: if num == max { max } else { num + 1 },
            items: list[i..end].to_vec(),
        });
        num += 1;
        i += limit;
    }

    pages
}
