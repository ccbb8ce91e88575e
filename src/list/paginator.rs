//! Pagination window over the filtered view
//!
//! Tracks the current page and page size, and derives the page count from
//! whatever total it is given. The window is recomputed after every change
//! to the filtered view, so a page index left pointing past the end of a
//! shrunken result set is reset rather than trusted.

/// Derived pagination state: current page, page size, page count
#[derive(Debug, Clone)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl Paginator {
    /// Create a paginator with the given page size (clamped to at least 1)
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
            total_pages: 1,
        }
    }

    /// Current page index (zero-based)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for the last known total (at least 1)
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Change the page size, clamped to at least 1
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recompute the window for a new item total.
    ///
    /// Resets to page 0 whenever the total is empty or the current page
    /// starts at or past the end of the items.
    pub fn update_total(&mut self, total: usize) {
        if total == 0 || self.page * self.per_page >= total {
            self.page = 0;
        }
        self.total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(self.per_page)
        };
    }

    /// Bounds of the current page's slice within `len` items.
    ///
    /// Self-heals by resetting to page 0 if the start offset no longer fits,
    /// which guards against stale page state after the item set shrank.
    pub fn slice_bounds(&mut self, len: usize) -> (usize, usize) {
        let mut start = self.page * self.per_page;
        if start >= len {
            self.page = 0;
            start = 0;
        }
        let end = (start + self.per_page).min(len);
        (start, end)
    }

    /// Whether a page exists before the current one
    #[must_use]
    pub const fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last one
    #[must_use]
    pub const fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Move to the previous page, if any
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Move to the next page, if any
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let mut paginator = Paginator::new(10);

        paginator.update_total(25);
        assert_eq!(paginator.total_pages(), 3);

        paginator.update_total(30);
        assert_eq!(paginator.total_pages(), 3);

        paginator.update_total(31);
        assert_eq!(paginator.total_pages(), 4);
    }

    #[test]
    fn test_empty_total_resets_to_single_page() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(50);
        paginator.next_page();
        paginator.next_page();

        paginator.update_total(0);
        assert_eq!(paginator.page(), 0);
        assert_eq!(paginator.total_pages(), 1);
    }

    #[test]
    fn test_stale_page_resets_when_total_shrinks() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(50);
        paginator.next_page();
        paginator.next_page();
        assert_eq!(paginator.page(), 2);

        // Page 2 starts at item 20; 15 items no longer reach it
        paginator.update_total(15);
        assert_eq!(paginator.page(), 0);
    }

    #[test]
    fn test_page_survives_shrink_that_still_covers_it() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(50);
        paginator.next_page();

        paginator.update_total(15);
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.total_pages(), 2);
    }

    #[test]
    fn test_slice_bounds_clamp_to_len() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(15);
        paginator.next_page();

        assert_eq!(paginator.slice_bounds(15), (10, 15));
    }

    #[test]
    fn test_slice_bounds_self_heal() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(50);
        paginator.next_page();
        paginator.next_page();

        // The item set shrank underneath the window
        assert_eq!(paginator.slice_bounds(5), (0, 5));
        assert_eq!(paginator.page(), 0);
    }

    #[test]
    fn test_no_navigation_past_bounds() {
        let mut paginator = Paginator::new(10);
        paginator.update_total(20);

        paginator.prev_page();
        assert_eq!(paginator.page(), 0);

        paginator.next_page();
        paginator.next_page();
        assert_eq!(paginator.page(), 1);
        assert!(paginator.on_last_page());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.per_page(), 1);

        let mut paginator = Paginator::new(5);
        paginator.set_per_page(0);
        assert_eq!(paginator.per_page(), 1);
    }
}
