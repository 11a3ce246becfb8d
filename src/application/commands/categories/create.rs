// src/application/commands/categories/create.rs
use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryTitle, NewCategory},
};

pub struct CreateCategoryCommand {
    pub title: String,
    /// Free text to build the slug from instead of the title.
    pub slug: Option<String>,
    pub parent_id: Option<i64>,
}

impl CreateCategoryCommand {
    pub fn builder() -> CreateCategoryCommandBuilder {
        CreateCategoryCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateCategoryCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    parent_id: Option<i64>,
}

impl CreateCategoryCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn build(self) -> Result<CreateCategoryCommand, &'static str> {
        Ok(CreateCategoryCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            parent_id: self.parent_id,
        })
    }
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let title = CategoryTitle::new(command.title)?;

        let parent = match command.parent_id {
            Some(id) => Some(
                self.read_repo
                    .find_by_id(CategoryId::new(id)?)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("parent category not found"))?,
            ),
            None => None,
        };

        let now = self.clock.now();
        let raw = command.slug.as_deref().unwrap_or(title.as_str());
        let candidate = self.slug_candidate(raw, parent.as_ref(), now);
        let parent_id = parent.map(|parent| parent.id);

        let created = self
            .slug_service
            .assign(&candidate, None, |slug| {
                let repo = Arc::clone(&self.write_repo);
                let new_category = NewCategory {
                    title: title.clone(),
                    slug,
                    parent_id,
                    created_at: now,
                    updated_at: now,
                };
                async move { repo.insert(new_category).await }
            })
            .await?;

        tracing::info!(id = created.id.0, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
