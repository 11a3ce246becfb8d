// src/application/commands/categories/update.rs
use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryTitle, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    /// Changing the title or the slug text resolves the slug again; the
    /// category never competes with its own stored slug.
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let title = command.title.map(CategoryTitle::new).transpose()?;
        if title.is_none() && command.slug.is_none() {
            return Ok(category.into());
        }

        let parent = match category.parent_id {
            Some(parent_id) => self.read_repo.find_by_id(parent_id).await?,
            None => None,
        };

        let now = self.clock.now();
        let raw = command
            .slug
            .as_deref()
            .or(title.as_ref().map(CategoryTitle::as_str))
            .unwrap_or(category.title.as_str());
        let candidate = self.slug_candidate(raw, parent.as_ref(), now);

        let updated = self
            .slug_service
            .assign(&candidate, Some(id.into()), |slug| {
                let repo = Arc::clone(&self.write_repo);
                let mut update = CategoryUpdate::new(id, now).with_slug(slug);
                if let Some(title) = &title {
                    update = update.with_title(title.clone());
                }
                async move { repo.update(update).await }
            })
            .await?;

        tracing::info!(id = updated.id.0, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
