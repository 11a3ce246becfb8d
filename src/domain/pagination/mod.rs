// src/domain/pagination/mod.rs
pub mod page;
pub mod sort;
pub mod source;

pub use page::Pagination;
pub use sort::{SortDirection, SortKey};
pub use source::TableSource;
