// src/domain/listing/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::value_objects::{ListingId, ListingKind, ListingTitle};
use crate::domain::slug::{Slug, SlugSubject};
use chrono::{DateTime, Utc};

const LISTING_SOURCE_ATTRIBUTES: &[&str] = &["title", "summary"];
const LISTING_SLUG_ATTRIBUTES: &[&str] = &["slug"];

fn text_attribute<'a>(
    field: &str,
    title: &'a ListingTitle,
    slug: Option<&'a Slug>,
    summary: Option<&'a str>,
) -> Option<&'a str> {
    match field {
        "title" => Some(title.as_str()),
        "slug" => slug.map(Slug::as_str),
        "summary" => summary,
        _ => None,
    }
}

fn ensure_slug_field(field: &str) -> DomainResult<()> {
    if LISTING_SLUG_ATTRIBUTES.contains(&field) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "listing has no slug attribute `{field}`"
        )))
    }
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub kind: ListingKind,
    pub title: ListingTitle,
    /// `None` only for rows imported before slugs were assigned.
    pub slug: Option<Slug>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Externally visible lookup key.
    pub fn route_key(&self) -> Option<&str> {
        self.slug.as_ref().map(Slug::as_str)
    }

    pub fn set_content(
        &mut self,
        title: Option<ListingTitle>,
        summary: Option<Option<String>>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        self.updated_at = now;
    }
}

impl SlugSubject for Listing {
    const SOURCE_ATTRIBUTES: &'static [&'static str] = LISTING_SOURCE_ATTRIBUTES;
    const SLUG_ATTRIBUTES: &'static [&'static str] = LISTING_SLUG_ATTRIBUTES;

    fn record_id(&self) -> Option<i64> {
        Some(self.id.into())
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        text_attribute(field, &self.title, self.slug.as_ref(), self.summary.as_deref())
    }

    fn assign_slug(&mut self, field: &str, slug: Slug) -> DomainResult<()> {
        ensure_slug_field(field)?;
        self.slug = Some(slug);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub kind: ListingKind,
    pub title: ListingTitle,
    pub slug: Option<Slug>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlugSubject for NewListing {
    const SOURCE_ATTRIBUTES: &'static [&'static str] = LISTING_SOURCE_ATTRIBUTES;
    const SLUG_ATTRIBUTES: &'static [&'static str] = LISTING_SLUG_ATTRIBUTES;

    fn record_id(&self) -> Option<i64> {
        None
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        text_attribute(field, &self.title, self.slug.as_ref(), self.summary.as_deref())
    }

    fn assign_slug(&mut self, field: &str, slug: Slug) -> DomainResult<()> {
        ensure_slug_field(field)?;
        self.slug = Some(slug);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ListingUpdate {
    pub id: ListingId,
    pub kind: ListingKind,
    pub title: Option<ListingTitle>,
    pub slug: Option<Slug>,
    pub summary: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl ListingUpdate {
    pub fn new(id: ListingId, kind: ListingKind, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            title: None,
            slug: None,
            summary: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ListingTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Diff a pending copy against its persisted snapshot.
    pub fn between(persisted: &Listing, pending: &Listing) -> Self {
        let mut update = Self::new(pending.id, pending.kind, pending.updated_at);
        if pending.title != persisted.title {
            update = update.with_title(pending.title.clone());
        }
        if pending.slug != persisted.slug {
            if let Some(slug) = &pending.slug {
                update = update.with_slug(slug.clone());
            }
        }
        if pending.summary != persisted.summary {
            update = update.with_summary(pending.summary.clone());
        }
        update
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.summary.is_none()
    }
}
