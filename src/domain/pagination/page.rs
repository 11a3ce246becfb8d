// src/domain/pagination/page.rs

/// Offset pagination over a counted result set.
///
/// The requested page is clamped into `1..=max(1, total_pages)`, so an empty
/// set still has a first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: u64,
    items_per_page: u64,
    current_page: u64,
}

impl Pagination {
    pub fn new(total_items: u64, items_per_page: u64, requested_page: u64) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page);
        let current_page = requested_page.clamp(1, total_pages.max(1));

        Self {
            total_items,
            items_per_page,
            current_page,
        }
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn offset(&self) -> u64 {
        (self.current_page - 1) * self.items_per_page
    }

    pub fn limit(&self) -> u64 {
        self.items_per_page
    }

    pub fn first_page(&self) -> Option<u64> {
        (self.current_page > 1).then_some(1)
    }

    pub fn last_page(&self) -> Option<u64> {
        let total_pages = self.total_pages();
        (self.current_page < total_pages).then_some(total_pages)
    }

    pub fn previous_page(&self) -> Option<u64> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.current_page < self.total_pages()).then(|| self.current_page + 1)
    }
}
