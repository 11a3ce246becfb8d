// src/application/dto/categories.rs
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            title: category.title.into_inner(),
            slug: category.slug.into_inner(),
            parent_id: category.parent_id.map(Into::into),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
