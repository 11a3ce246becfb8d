// src/application/queries/categories/service.rs
use std::sync::Arc;

use crate::{
    application::table::TableConfig,
    domain::{category::CategoryReadRepository, field::Schema},
};

pub struct CategoryQueryService {
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) schema: Arc<Schema>,
    pub(super) table_config: TableConfig,
}

impl CategoryQueryService {
    pub fn new(
        read_repo: Arc<dyn CategoryReadRepository>,
        schema: Arc<Schema>,
        table_config: TableConfig,
    ) -> Self {
        Self {
            read_repo,
            schema,
            table_config,
        }
    }
}
