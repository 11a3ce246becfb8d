// src/domain/category/mod.rs
pub mod entity;
pub mod meta;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, NewCategory};
pub use meta::{CATEGORY_MODEL, category_meta, category_schema};
pub use repository::{CategoryReadRepository, CategoryWriteRepository};
pub use value_objects::{CategoryId, CategoryTitle};
