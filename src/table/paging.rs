// src/table/paging.rs
//! Page window arithmetic for the pager control.

use std::ops::Range;

use crate::config::consts::MAX_PAGE_BUTTONS;

/// Current page, page size and item count. Pages are 1-based.
///
/// The stored page is not reset when the item count changes; the accessors
/// clamp it into `1..=total_pages()` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl PageWindow {
    pub fn new(items_per_page: usize, total_items: usize) -> Self {
        Self { current_page: 1, items_per_page: items_per_page.max(1), total_items }
    }

    pub fn items_per_page(&self) -> usize { self.items_per_page }
    pub fn total_items(&self) -> usize { self.total_items }

    /// `ceil(total_items / items_per_page)`, never below 1.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page.clamp(1, self.total_pages())
    }

    pub fn is_first(&self) -> bool { self.current_page() == 1 }
    pub fn is_last(&self) -> bool { self.current_page() == self.total_pages() }

    /// Out-of-range requests clamp; nothing is rejected.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.set_page(self.current_page() + 1);
        }
    }

    pub fn prev(&mut self) {
        if !self.is_first() {
            self.set_page(self.current_page() - 1);
        }
    }

    /// Page size changes always go back to page 1.
    pub fn set_items_per_page(&mut self, n: usize) {
        self.items_per_page = n.max(1);
        self.current_page = 1;
    }

    /// Does not touch the current page.
    pub fn set_total_items(&mut self, n: usize) {
        self.total_items = n;
    }

    /// Index range of the visible slice within the sorted rows.
    pub fn slice(&self) -> Range<usize> {
        let start = (self.current_page() - 1) * self.items_per_page;
        let start = start.min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        start..end
    }

    /// At most `MAX_PAGE_BUTTONS` page numbers around the current page.
    pub fn page_numbers(&self) -> Vec<usize> {
        window(self.current_page(), self.total_pages(), MAX_PAGE_BUTTONS)
    }

    /// Every page, for the direct page selector.
    pub fn all_pages(&self) -> Range<usize> {
        1..self.total_pages() + 1
    }

    /// 1-based (first, last, total) for "Showing X to Y of Z"; (0, 0, 0) when empty.
    pub fn showing(&self) -> (usize, usize, usize) {
        if self.total_items == 0 {
            return (0, 0, 0);
        }
        let r = self.slice();
        (r.start + 1, r.end, self.total_items)
    }
}

/// Sliding window of `max` pages: all pages if they fit, the first `max` near
/// the start, the last `max` near the end, otherwise centered on `current`.
pub fn window(current: usize, total: usize, max: usize) -> Vec<usize> {
    if max == 0 {
        return Vec::new();
    }
    if total <= max {
        return (1..=total).collect();
    }
    let half = max / 2;
    let start = if current <= half + 1 {
        1
    } else if current + half >= total {
        total + 1 - max
    } else {
        current - half
    };
    (start..start + max).collect()
}
