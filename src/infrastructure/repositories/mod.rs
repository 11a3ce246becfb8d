// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_category;

pub use error::map_sqlx;
pub use sqlite_category::{
    SqliteCategoryReadRepository, SqliteCategoryTable, SqliteCategoryWriteRepository,
};
