// src/domain/slug/repository.rs
use super::value_objects::SlugPattern;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// A collection of records owning a slug column.
#[async_trait]
pub trait SlugScope: Send + Sync {
    /// Count stored slugs matched by `pattern`, leaving out the record `exclude`.
    async fn count_matching(
        &self,
        pattern: &SlugPattern<'_>,
        exclude: Option<i64>,
    ) -> DomainResult<u64>;
}
