/// Return the `page_number`-th page of `items` for pages of `page_size` entries.
///
/// Page `p` covers indices `[p * s, p * s + s)` clipped to the slice length, so
/// any page past the end is empty. Callers must reject a zero page size before
/// getting here; a zero size yields an empty page.
pub fn page_slice<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` entries, `page_size` at a time.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
