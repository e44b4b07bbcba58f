//! Page slicing

/// One page of an ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    /// Requested page after clamping, 1-based
    pub page: usize,
}

/// `ceil(count / page_size)`; 0 for an empty sequence
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page number into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice page `page` (1-based) of `items`. A page size of 0 counts as 1.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> PageSlice<'_, T> {
    let size = page_size.max(1);
    let total_pages = total_pages(items.len(), size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * size).min(items.len());
    let end = (start + size).min(items.len());

    PageSlice {
        items: &items[start..end],
        total_pages,
        page,
    }
}
