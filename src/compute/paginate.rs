//! 1-indexed pagination over slices.

use crate::compute::validation::validate_page_size;
use crate::config::Config;
use crate::error::Result;
use recordset_types::PaginatedResult;

/// Return page `page` (1-indexed) of `items`, `page_size` items per page.
///
/// The page covers indices `[(page - 1) * page_size, page * page_size)`,
/// cut to the length of `items`. The requested page is not clamped: `page <= 0`
/// or a page past the end yields an empty `items`, while `total_items`,
/// `total_pages = ceil(total_items / page_size)` and `current_page` are still
/// reported.
///
/// # Errors
///
/// Returns `RecordsetError::InvalidArgument` when `page_size` is zero.
///
/// # Examples
///
/// ```
/// use recordset::paginate;
///
/// let letters = ["a", "b", "c", "d", "e"];
/// let page = paginate(&letters, 2, 2)?;
///
/// assert_eq!(page.items, vec!["c", "d"]);
/// assert_eq!(page.total_pages, 3);
///
/// let past_end = paginate(&letters, 9, 2)?;
/// assert!(past_end.items.is_empty());
/// assert_eq!(past_end.current_page, 9);
/// # Ok::<(), recordset::RecordsetError>(())
/// ```
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> Result<PaginatedResult<T>> {
    validate_page_size(page_size)?;

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    Ok(PaginatedResult {
        items: page_window(items, page, page_size).to_vec(),
        total_items,
        total_pages,
        current_page: page,
    })
}

/// `paginate` with the page size taken from `config`.
pub fn paginate_with<T: Clone>(
    items: &[T],
    page: i64,
    config: &Config,
) -> Result<PaginatedResult<T>> {
    paginate(items, page, config.page_size)
}

/// Slice of `items` belonging to `page`; empty when out of range.
fn page_window<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 {
        return &[];
    }

    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
