// src/domain/pagination/source.rs
use super::sort::{SortDirection, SortKey};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// A query over one model that a table can count, order and window.
#[async_trait]
pub trait TableSource: Send + Sync {
    type Row: Send;

    /// Name of the model the rows belong to.
    fn model(&self) -> &str;

    async fn count(&self) -> DomainResult<u64>;

    /// Fails with a validation error when the key names no sortable field.
    fn order_by(&mut self, key: &SortKey, direction: SortDirection) -> DomainResult<()>;

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Self::Row>>;
}

#[async_trait]
impl<T: TableSource + ?Sized> TableSource for Box<T> {
    type Row = T::Row;

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn count(&self) -> DomainResult<u64> {
        (**self).count().await
    }

    fn order_by(&mut self, key: &SortKey, direction: SortDirection) -> DomainResult<()> {
        (**self).order_by(key, direction)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Self::Row>> {
        (**self).fetch(offset, limit).await
    }
}
