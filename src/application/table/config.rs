// src/application/table/config.rs
use crate::domain::pagination::SortDirection;

/// Which query parameters drive a table, and its page size limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub sort_key: String,
    pub order_key: String,
    pub limit_key: String,
    pub page_key: String,
    pub items_per_page: u64,
    pub max_items_per_page: u64,
    /// Direction requested by the sort link of a column that is not the
    /// active one.
    pub default_direction: SortDirection,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            sort_key: "sort".into(),
            order_key: "how".into(),
            limit_key: "limit".into(),
            page_key: "page".into(),
            items_per_page: 10,
            max_items_per_page: 100,
            default_direction: SortDirection::Asc,
        }
    }
}

impl TableConfig {
    pub fn with_items_per_page(mut self, items_per_page: u64) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn with_max_items_per_page(mut self, max_items_per_page: u64) -> Self {
        self.max_items_per_page = max_items_per_page.max(1);
        self
    }

    pub fn with_default_direction(mut self, direction: SortDirection) -> Self {
        self.default_direction = direction;
        self
    }

    /// Page size for a raw `limit` parameter. Anything that is not a positive
    /// integer falls back to `items_per_page`.
    pub fn page_size(&self, requested: Option<&str>) -> u64 {
        requested
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(self.items_per_page)
            .min(self.max_items_per_page)
    }
}
