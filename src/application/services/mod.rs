// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::categories::CategoryCommandService,
        ports::time::Clock,
        queries::categories::CategoryQueryService,
        table::TableConfig,
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository, category_schema},
        slug::{SlugConfig, SlugScope, SlugService},
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        slug_scope: Arc<dyn SlugScope>,
        clock: Arc<dyn Clock>,
        slug_config: SlugConfig,
        table_config: TableConfig,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slug_scope, slug_config));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_read_repo),
            Arc::new(category_schema()),
            table_config,
        ));

        Self {
            category_commands,
            category_queries,
        }
    }
}
