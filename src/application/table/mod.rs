// src/application/table/mod.rs
mod adapter;
mod config;
mod request;

pub use adapter::{PageNav, SortIndicator, SortLink, TableAdapter};
pub use config::TableConfig;
pub use request::TableRequest;
