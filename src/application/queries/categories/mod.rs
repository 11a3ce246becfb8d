// src/application/queries/categories/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetCategoryBySlugQuery;
pub use list::{CATEGORY_COLUMNS, ListCategoriesQuery};
pub use service::CategoryQueryService;
