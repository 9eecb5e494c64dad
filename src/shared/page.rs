/// Returns the half-open slice `[page * page_size, page * page_size + page_size)`
/// clamped to the bounds of `items`.
/// Pages past the end and a zero page size give an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let Some(start) = page.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items, zero when there is nothing to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// "Showing 3-4 of 5" style summary of a page, empty when there are no items.
pub fn showing(len: usize, page_size: usize, page: usize) -> String {
    let Some(start) = page.checked_mul(page_size) else {
        return String::new();
    };
    if page_size == 0 || start >= len {
        return String::new();
    }
    let end = start.saturating_add(page_size).min(len);
    format!("Showing {}-{end} of {len}", start + 1)
}

#[test]
fn paginate_clamps_last_page() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(paginate(&items, 2, 2), &[5]);
    assert!(paginate(&items, 2, 3).is_empty());
    assert!(paginate(&items, 0, 0).is_empty());
    assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
}

#[test]
fn showing_test() {
    assert_eq!(showing(5, 2, 0), "Showing 1-2 of 5");
    assert_eq!(showing(5, 2, 2), "Showing 5-5 of 5");
    assert_eq!(showing(0, 2, 0), "");
    assert_eq!(page_count(5, 2), 3);
    assert_eq!(page_count(0, 2), 0);
}
