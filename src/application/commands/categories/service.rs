// src/application/commands/categories/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::ports::time::Clock,
    domain::{
        category::{Category, CategoryReadRepository, CategoryWriteRepository},
        slug::SlugService,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    /// Normalized slug candidate for `raw`, nested under the parent's slug
    /// when a hierarchy separator is configured.
    pub(super) fn slug_candidate(
        &self,
        raw: &str,
        parent: Option<&Category>,
        now: DateTime<Utc>,
    ) -> String {
        let config = self.slug_service.config();
        let raw = match (parent, config.hierarchy_separator()) {
            (Some(parent), Some(hierarchy)) => format!("{}{hierarchy}{raw}", parent.slug),
            _ => raw.to_string(),
        };

        let candidate = config.normalize(&raw);
        if candidate.is_empty() {
            format!("category{}{}", config.separator(), now.timestamp())
        } else {
            candidate
        }
    }
}
