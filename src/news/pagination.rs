use std::ops::Range;

/// Cards per news page.
pub const NEWS_PER_PAGE: usize = 4;

/// Pages shown on each side of the current one once the window collapses.
const WINDOW_DELTA: usize = 2;

/// Up to this many pages every number is shown.
const COMPACT_LIMIT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page numbers for the pagination control around `current`.
///
/// Small page counts list every page. Larger ones always keep the first and
/// last page, the pages within two of `current`, and an ellipsis over
/// each skipped gap: `1 … 8 9 10 11 12 … 20`.
pub fn page_window(total_pages: usize, current: usize) -> Vec<PageItem> {
    if total_pages <= COMPACT_LIMIT {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    if current > WINDOW_DELTA + 2 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(WINDOW_DELTA).max(2);
    let end = (current + WINDOW_DELTA).min(total_pages - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current + WINDOW_DELTA < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

/// Current page over a fixed-size slicing of `total_items`.
/// `current_page` stays within `1..=total_pages()` (or at 1 when there is nothing to page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, NEWS_PER_PAGE)
    }

    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Pagination {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Move to `page`, clamped into range.
    pub fn go_to(self, page: usize) -> Self {
        let last = self.total_pages().max(1);
        Pagination {
            current_page: page.clamp(1, last),
            ..self
        }
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn previous(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.current_page < self.total_pages()).then(|| self.current_page + 1)
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.total_pages(), self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn small_totals_show_every_page() {
        for total in 0..=7 {
            for current in 1..=total.max(1) {
                let expected: Vec<PageItem> = (1..=total).map(Page).collect();
                assert_eq!(page_window(total, current), expected);
            }
        }
    }

    #[test]
    fn middle_of_twenty() {
        assert_eq!(
            page_window(20, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn near_the_start_has_no_left_ellipsis() {
        assert_eq!(
            page_window(20, 1),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(20, 4),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(20, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn near_the_end_has_no_right_ellipsis() {
        assert_eq!(
            page_window(20, 20),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            page_window(20, 17),
            vec![Page(1), Ellipsis, Page(15), Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn eight_pages_collapse() {
        assert_eq!(
            page_window(8, 1),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn nine_records_make_three_pages() {
        let p = Pagination::new(9);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.range(), 0..4);
        assert_eq!(p.go_to(2).range(), 4..8);
        assert_eq!(p.go_to(3).range(), 8..9);
    }

    #[test]
    fn go_to_clamps() {
        let p = Pagination::new(9);
        assert_eq!(p.go_to(0).current_page(), 1);
        assert_eq!(p.go_to(4).current_page(), 3);
        assert_eq!(p.go_to(usize::MAX).current_page(), 3);
    }

    #[test]
    fn previous_and_next_stop_at_the_edges() {
        let p = Pagination::new(9);
        assert_eq!(p.previous(), None);
        assert_eq!(p.next(), Some(2));

        let last = p.go_to(3);
        assert_eq!(last.previous(), Some(2));
        assert_eq!(last.next(), None);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let p = Pagination::new(0).go_to(5);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.range(), 0..0);
        assert_eq!(p.previous(), None);
        assert_eq!(p.next(), None);
        assert!(p.window().is_empty());
    }
}
