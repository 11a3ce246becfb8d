// src/application/queries/categories/list.rs
use std::sync::Arc;

use super::CategoryQueryService;
use crate::application::{
    dto::CategoryTableDto,
    error::ApplicationResult,
    ports::render::PaginationRenderer,
    table::{TableAdapter, TableRequest},
};

/// Header columns of the category table: field name and, for relations,
/// the field of the related model to sort by.
pub const CATEGORY_COLUMNS: &[(&str, Option<&str>)] = &[
    ("title", None),
    ("slug", None),
    ("parent", Some("title")),
    ("created_at", None),
];

pub struct ListCategoriesQuery {
    pub request: TableRequest,
    /// View name handed to the pagination renderer.
    pub view: String,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
        renderer: &dyn PaginationRenderer,
    ) -> ApplicationResult<CategoryTableDto> {
        let table = TableAdapter::new(
            self.read_repo.table(),
            Arc::clone(&self.schema),
            query.request,
            self.table_config.clone(),
        )
        .await?;

        let columns = CATEGORY_COLUMNS
            .iter()
            .map(|(column, foreign)| table.sort(column, *foreign))
            .collect::<ApplicationResult<Vec<_>>>()?;

        let items = table.items().await?.into_iter().map(Into::into).collect();
        let pagination = table.summary();
        let navigation = table.render(renderer, &query.view);

        Ok(CategoryTableDto {
            items,
            pagination,
            columns,
            navigation,
        })
    }
}
