// src/application/commands/terms/delete.rs
use super::TermCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::taxonomy::{TaxonomyKind, TermId},
};

pub struct DeleteTermCommand {
    pub kind: TaxonomyKind,
    pub id: i64,
}

impl TermCommandService {
    pub async fn delete_term(&self, command: DeleteTermCommand) -> ApplicationResult<()> {
        let id = TermId::new(command.id)?;
        if self.repo.find_by_id(command.kind, id).await?.is_none() {
            return Err(ApplicationError::not_found("term not found"));
        }

        self.repo.delete(command.kind, id).await?;
        tracing::info!(kind = %command.kind, id = i64::from(id), "term deleted");
        Ok(())
    }
}
