// src/domain/slug/services.rs
use std::{future::Future, sync::Arc};

use super::{
    config::SlugConfig,
    repository::SlugScope,
    value_objects::{Slug, SlugPattern},
};
use crate::domain::errors::DomainResult;

/// Domain service producing unique slugs inside one [`SlugScope`].
pub struct SlugService {
    scope: Arc<dyn SlugScope>,
    config: SlugConfig,
}

impl SlugService {
    pub fn new(scope: Arc<dyn SlugScope>, config: SlugConfig) -> Self {
        Self { scope, config }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.config.normalize(raw)
    }

    /// Disambiguate `candidate` against the stored slugs.
    ///
    /// With no competing slug the candidate is returned unchanged; otherwise
    /// `count + 1` is appended after the separator. `exclude` keeps the
    /// record being updated from competing with itself.
    pub async fn resolve_unique(
        &self,
        candidate: &str,
        exclude: Option<i64>,
    ) -> DomainResult<Slug> {
        self.resolve_with_offset(candidate, exclude, 0).await
    }

    /// Resolve a slug and hand it to `persist`, retrying when the store
    /// reports a conflict on the slug column.
    ///
    /// Each retry counts the scope again and moves the suffix forward by the
    /// attempt number, so a racing writer that already committed, or one
    /// that has not yet become visible, is stepped over. After
    /// `max_attempts` the last conflict is returned.
    pub async fn assign<T, F, Fut>(
        &self,
        candidate: &str,
        exclude: Option<i64>,
        mut persist: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut + Send,
        Fut: Future<Output = DomainResult<T>> + Send,
        T: Send,
    {
        let max_attempts = self.config.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            let slug = self
                .resolve_with_offset(candidate, exclude, u64::from(attempt))
                .await?;

            match persist(slug.clone()).await {
                Err(err) if err.is_conflict() && attempt + 1 < max_attempts => {
                    tracing::warn!(slug = %slug, attempt, "slug taken on save, retrying");
                    attempt += 1;
                }
                Err(err) if err.is_conflict() => {
                    tracing::warn!(slug = %slug, attempts = max_attempts, "giving up on slug");
                    return Err(err);
                }
                result => return result,
            }
        }
    }

    async fn resolve_with_offset(
        &self,
        candidate: &str,
        exclude: Option<i64>,
        offset: u64,
    ) -> DomainResult<Slug> {
        let pattern = SlugPattern::new(
            candidate,
            self.config.separator(),
            self.config.strategy(),
        );
        let count = self.scope.count_matching(&pattern, exclude).await?;

        tracing::debug!(
            candidate,
            count,
            offset,
            strategy = %self.config.strategy(),
            "resolving slug"
        );

        if count == 0 && offset == 0 {
            return Slug::new(candidate);
        }

        let suffix = count + 1 + offset;
        Slug::new(format!("{candidate}{}{suffix}", self.config.separator()))
    }
}
