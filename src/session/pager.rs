//! Fixed-size paging over the catalog.

use std::ops::Range;

/// Books shown per page while browsing.
pub const BOOKS_PER_PAGE: usize = 5;

/// Cursor over a fixed-size paging of `total` items.
#[derive(Debug, Clone)]
pub struct Pager {
    total: usize,
    current: usize,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    /// Number of pages, `ceil(total / page size)`. Zero when there are no
    /// items.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(BOOKS_PER_PAGE)
    }

    /// Zero-based index of the current page.
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Absolute index range of the items on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.current * BOOKS_PER_PAGE;
        let end = (start + BOOKS_PER_PAGE).min(self.total);
        start..end
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self) {
        if self.current + 1 < self.page_count() {
            self.current += 1;
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Translate a 1-based position on the current page to an absolute
    /// index. Returns `None` for positions outside the page.
    pub fn absolute_index(&self, position: usize) -> Option<usize> {
        let range = self.page_range();
        if position == 0 || position > range.len() {
            return None;
        }
        Some(range.start + position - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Pager::new(0).page_count(), 0);
        assert_eq!(Pager::new(1).page_count(), 1);
        assert_eq!(Pager::new(5).page_count(), 1);
        assert_eq!(Pager::new(6).page_count(), 2);
        assert_eq!(Pager::new(12).page_count(), 3);
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut pager = Pager::new(12);
        pager.next();
        pager.next();
        assert_eq!(pager.current_page(), 2);

        // Already on the last page
        pager.next();
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.page_range(), 10..12);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut pager = Pager::new(12);
        pager.prev();
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.page_range(), 0..5);
    }

    #[test]
    fn test_absolute_index() {
        let mut pager = Pager::new(12);
        assert_eq!(pager.absolute_index(1), Some(0));
        assert_eq!(pager.absolute_index(5), Some(4));
        assert_eq!(pager.absolute_index(0), None);
        assert_eq!(pager.absolute_index(6), None);

        pager.next();
        pager.next();
        // Last page holds items 10 and 11
        assert_eq!(pager.absolute_index(1), Some(10));
        assert_eq!(pager.absolute_index(2), Some(11));
        assert_eq!(pager.absolute_index(3), None);
    }

    #[test]
    fn test_empty_pager() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.page_range(), 0..0);
        assert_eq!(pager.absolute_index(1), None);
        pager.next();
        assert_eq!(pager.current_page(), 0);
    }
}
