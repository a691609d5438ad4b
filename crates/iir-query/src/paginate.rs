//! Fixed-size pagination.
//!
//! Pages are 1-based. An empty input has zero pages and reports page 1.

use serde::Serialize;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page of a sequence plus the metadata a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// `ceil(total_items / page_size)`; a zero page size is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slice `items` into page `page` of `page_size` items.
///
/// A page outside `[1, total_pages]` is clamped into range, so the returned
/// `page` always satisfies the page invariant.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * page_size).min(total_items);
    let end = (page * page_size).min(total_items);
    Page {
        items: &items[start..end],
        total_items,
        total_pages,
        page,
    }
}

/// Current page number and fixed page size.
///
/// Navigation never mutates a state in place: [`PageState::step`] returns the
/// next state, or `None` when the move would leave `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// First page with the given size (minimum 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The same page size, back on page 1.
    #[must_use]
    pub fn first(&self) -> Self {
        Self::new(self.page_size)
    }

    /// The same page size on `page`, clamped into `[1, max(total_pages, 1)]`.
    #[must_use]
    pub fn at(&self, page: usize, total_items: usize) -> Self {
        Self {
            page: page.clamp(1, self.total_pages(total_items).max(1)),
            page_size: self.page_size,
        }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }

    /// Move by `delta` pages, or `None` if the target page does not exist.
    pub fn step(&self, delta: isize, total_items: usize) -> Option<Self> {
        let target = self.page.checked_add_signed(delta)?;
        if target < 1 || target > self.total_pages(total_items) {
            return None;
        }
        Some(Self {
            page: target,
            page_size: self.page_size,
        })
    }

    /// Slice `items` at this state.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_arithmetic() {
        let items: Vec<u32> = (1..=120).collect();
        let page = paginate(&items, 1, 50);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 120);

        let page = paginate(&items, 3, 50);
        assert_eq!(page.items.first(), Some(&101));
        assert_eq!(page.items.last(), Some(&120));
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 4, 50);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 0, 4).page, 1);
        let page = paginate(&items, 9, 4);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, &[9, 10]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(100, 50), 2);
        assert_eq!(total_pages(101, 50), 3);
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn step_is_a_no_op_outside_range() {
        let state = PageState::new(50);
        assert_eq!(state.step(-1, 120), None);
        let second = state.step(1, 120).expect("page 2 exists");
        assert_eq!(second.page(), 2);
        let third = second.step(1, 120).expect("page 3 exists");
        assert_eq!(third.step(1, 120), None);
        assert_eq!(state.step(1, 0), None);
        assert_eq!(third.first().page(), 1);
    }

    #[test]
    fn jumps_clamp_to_existing_pages() {
        let state = PageState::new(50);
        assert_eq!(state.at(3, 120).page(), 3);
        assert_eq!(state.at(99, 120).page(), 3);
        assert_eq!(state.at(0, 120).page(), 1);
        assert_eq!(state.at(5, 0).page(), 1);
    }
}
