//! Fixed-size page slicing.

/// Books per page in the list view.
pub const PAGE_SIZE: usize = 10;

/// A 1-indexed page of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Page number after clamping.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages for `len` items: `ceil(len / page_size)`, never less than 1.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice out page `page` (1-indexed) of `items`.
///
/// Out-of-range page numbers are clamped to `[1, page_count]`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = page_count(items.len(), page_size);
    let number = page.clamp(1, total_pages);

    let start = ((number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
    }
}
