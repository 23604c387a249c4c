// src/application/commands/listings/delete.rs
use super::ListingCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::listing::{ListingId, ListingKind},
};

pub struct DeleteListingCommand {
    pub kind: ListingKind,
    pub id: i64,
}

impl ListingCommandService {
    pub async fn delete_listing(&self, command: DeleteListingCommand) -> ApplicationResult<()> {
        let id = ListingId::new(command.id)?;
        if self.read_repo.find_by_id(command.kind, id).await?.is_none() {
            return Err(ApplicationError::not_found("listing not found"));
        }

        self.write_repo.delete(command.kind, id).await?;
        tracing::info!(kind = %command.kind, id = i64::from(id), "listing deleted");
        Ok(())
    }
}
