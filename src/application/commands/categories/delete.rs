// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{application::error::ApplicationResult, domain::category::CategoryId};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(id = id.0, "category deleted");
        Ok(())
    }
}
