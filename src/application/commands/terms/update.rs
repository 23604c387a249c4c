// src/application/commands/terms/update.rs
use super::TermCommandService;
use crate::{
    application::{
        commands::{normalize_text, should_retry_slug_conflict},
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{TaxonomyKind, TermId, TermName, TermUpdate},
};

pub struct UpdateTermCommand {
    pub kind: TaxonomyKind,
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TermCommandService {
    pub async fn update_term(&self, command: UpdateTermCommand) -> ApplicationResult<TermDto> {
        let UpdateTermCommand {
            kind,
            id,
            name,
            description,
        } = command;

        let id = TermId::new(id)?;
        let persisted = self
            .repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("term not found"))?;

        let name = name.map(TermName::new).transpose()?;
        let description = description.map(|d| normalize_text(Some(d)));
        let slugger = self.slug_assigner(kind)?;

        let mut attempt = 0;
        loop {
            let now = self.clock.now();
            let mut pending = persisted.clone();
            if let Some(name) = &name {
                pending.rename(name.clone(), now);
            }
            if let Some(description) = &description {
                pending.describe(description.clone(), now);
            }

            let regenerated = slugger
                .maybe_reassign_on_update(&persisted, &mut pending)
                .await?;

            let update = TermUpdate::between(&persisted, &pending);
            if update.is_empty() {
                return Ok(persisted.into());
            }

            match self.repo.update(update).await {
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
