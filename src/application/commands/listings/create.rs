// src/application/commands/listings/create.rs
use super::ListingCommandService;
use crate::{
    application::{
        commands::{normalize_text, should_retry_slug_conflict},
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        listing::{ListingKind, ListingTitle, NewListing},
        slug::Slug,
    },
};

pub struct CreateListingCommand {
    pub kind: ListingKind,
    pub title: String,
    /// Pre-assigned slug; kept verbatim when present.
    pub slug: Option<String>,
    pub summary: Option<String>,
}

impl CreateListingCommand {
    pub fn builder(kind: ListingKind) -> CreateListingCommandBuilder {
        CreateListingCommandBuilder {
            kind,
            title: None,
            slug: None,
            summary: None,
        }
    }
}

pub struct CreateListingCommandBuilder {
    kind: ListingKind,
    title: Option<String>,
    slug: Option<String>,
    summary: Option<String>,
}

impl CreateListingCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn build(self) -> CreateListingCommand {
        CreateListingCommand {
            kind: self.kind,
            title: self.title.unwrap_or_default(),
            slug: self.slug,
            summary: self.summary,
        }
    }
}

impl ListingCommandService {
    pub async fn create_listing(&self, command: CreateListingCommand) -> ApplicationResult<ListingDto> {
        let CreateListingCommand {
            kind,
            title,
            slug,
            summary,
        } = command;

        let title = ListingTitle::new(title)?;
        let slug = normalize_text(slug).map(Slug::new).transpose()?;
        let slug_generated = slug.is_none();
        let slugger = self.slug_assigner(kind)?;
        let now = self.clock.now();

        let mut draft = NewListing {
            kind,
            title,
            slug,
            summary: normalize_text(summary),
            created_at: now,
            updated_at: now,
        };

        let mut attempt = 0;
        loop {
            slugger.assign_on_create(&mut draft).await?;

            match self.write_repo.insert(draft.clone()).await {
                Ok(created) => {
                    tracing::info!(
                        kind = %kind,
                        id = i64::from(created.id),
                        slug = created.route_key().unwrap_or_default(),
                        "listing created"
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
