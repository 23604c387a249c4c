// src/application/commands/terms/create.rs
use super::TermCommandService;
use crate::{
    application::{
        commands::{normalize_text, should_retry_slug_conflict},
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        slug::Slug,
        taxonomy::{NewTerm, TaxonomyKind, TermName},
    },
};

pub struct CreateTermCommand {
    pub kind: TaxonomyKind,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl TermCommandService {
    pub async fn create_term(&self, command: CreateTermCommand) -> ApplicationResult<TermDto> {
        let CreateTermCommand {
            kind,
            name,
            slug,
            description,
        } = command;

        let name = TermName::new(name)?;
        let slug = normalize_text(slug).map(Slug::new).transpose()?;
        let slug_generated = slug.is_none();
        let slugger = self.slug_assigner(kind)?;
        let now = self.clock.now();

        let mut draft = NewTerm {
            kind,
            name,
            slug,
            description: normalize_text(description),
            created_at: now,
            updated_at: now,
        };

        let mut attempt = 0;
        loop {
            slugger.assign_on_create(&mut draft).await?;

            match self.repo.insert(draft.clone()).await {
                Ok(created) => {
                    tracing::info!(
                        kind = %kind,
                        id = i64::from(created.id),
                        slug = created.route_key().unwrap_or_default(),
                        "term created"
                    );
                    return Ok(created.into());
                }
                Err(err)
                    if should_retry_slug_conflict(
                        &err,
                        slug_generated,
                        attempt,
                        self.conflict_retries,
                    ) =>
                {
                    attempt += 1;
                    tracing::warn!(kind = %kind, attempt, error = %err, "slug taken concurrently, probing again");
                    draft.slug = None;
                }
                Err(err) if err.is_conflict() && !slug_generated => {
                    let slug = draft.slug.as_ref().map(Slug::as_str).unwrap_or_default();
                    return Err(ApplicationError::conflict(format!(
                        "slug `{slug}` is already taken"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
