// src/application/dto/table.rs
use super::CategoryDto;
use crate::application::table::SortLink;
use crate::domain::pagination::{Pagination, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub total_items: u64,
    pub items_per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub direction: SortDirection,
}

impl TableSummary {
    pub fn new(pagination: &Pagination, sort: Option<&SortKey>, direction: SortDirection) -> Self {
        Self {
            total_items: pagination.total_items(),
            items_per_page: pagination.items_per_page(),
            current_page: pagination.current_page(),
            total_pages: pagination.total_pages(),
            previous_page: pagination.previous_page(),
            next_page: pagination.next_page(),
            sort: sort.map(ToString::to_string),
            direction,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTableDto {
    pub items: Vec<CategoryDto>,
    pub pagination: TableSummary,
    pub columns: Vec<SortLink>,
    /// Page links as produced by the caller's renderer.
    #[serde(skip)]
    pub navigation: String,
}
