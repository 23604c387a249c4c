// src/application/commands/listings/update.rs
use super::ListingCommandService;
use crate::{
    application::{
        commands::{normalize_text, should_retry_slug_conflict},
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::{ListingId, ListingKind, ListingTitle, ListingUpdate},
};

/// Partial edit. The slug is not editable here: it only changes through the
/// update hook when a legacy row without a slug gets a new title.
pub struct UpdateListingCommand {
    pub kind: ListingKind,
    pub id: i64,
    pub title: Option<String>,
    /// `Some("")` clears the summary.
    pub summary: Option<String>,
}

impl ListingCommandService {
    pub async fn update_listing(&self, command: UpdateListingCommand) -> ApplicationResult<ListingDto> {
        let UpdateListingCommand {
            kind,
            id,
            title,
            summary,
        } = command;

        let id = ListingId::new(id)?;
        let persisted = self
            .read_repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("listing not found"))?;

        let title = title.map(ListingTitle::new).transpose()?;
        let summary = summary.map(|s| normalize_text(Some(s)));
        let slugger = self.slug_assigner(kind)?;

        let mut attempt = 0;
        loop {
            let mut pending = persisted.clone();
            pending.set_content(title.clone(), summary.clone(), self.clock.now());
            let regenerated = slugger
                .maybe_reassign_on_update(&persisted, &mut pending)
                .await?;

            let update = ListingUpdate::between(&persisted, &pending);
            if update.is_empty() {
                return Ok(persisted.into());
            }

            match self.write_repo.update(update).await {
                Ok(updated) => return Ok(updated.into()),
                Err(err)
                    if should_retry_slug_conflict(
                        &err,
                        regenerated,
                        attempt,
                        self.conflict_retries,
                    ) =>
                {
                    attempt += 1;
                    tracing::warn!(kind = %kind, id = i64::from(id), attempt, error = %err, "slug taken concurrently, probing again");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
