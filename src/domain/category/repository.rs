// src/domain/category/repository.rs
use super::entity::{Category, CategoryUpdate, NewCategory};
use super::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::TableSource;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already stored.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;

    /// Fresh, unordered query over every category.
    fn table(&self) -> Box<dyn TableSource<Row = Category>>;
}
