// src/domain/taxonomy/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugSubject};
use crate::domain::taxonomy::value_objects::{TaxonomyKind, TermId, TermName};
use chrono::{DateTime, Utc};

const TERM_SOURCE_ATTRIBUTES: &[&str] = &["name", "description"];
const TERM_SLUG_ATTRIBUTES: &[&str] = &["slug"];

fn text_attribute<'a>(
    field: &str,
    name: &'a TermName,
    slug: Option<&'a Slug>,
    description: Option<&'a str>,
) -> Option<&'a str> {
    match field {
        "name" => Some(name.as_str()),
        "slug" => slug.map(Slug::as_str),
        "description" => description,
        _ => None,
    }
}

fn store_slug(target: &mut Option<Slug>, field: &str, slug: Slug) -> DomainResult<()> {
    if !TERM_SLUG_ATTRIBUTES.contains(&field) {
        return Err(DomainError::Validation(format!(
            "term has no slug attribute `{field}`"
        )));
    }
    *target = Some(slug);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Term {
    pub id: TermId,
    pub kind: TaxonomyKind,
    pub name: TermName,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Term {
    pub fn route_key(&self) -> Option<&str> {
        self.slug.as_ref().map(Slug::as_str)
    }

    pub fn rename(&mut self, name: TermName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }

    pub fn describe(&mut self, description: Option<String>, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }
}

impl SlugSubject for Term {
    const SOURCE_ATTRIBUTES: &'static [&'static str] = TERM_SOURCE_ATTRIBUTES;
    const SLUG_ATTRIBUTES: &'static [&'static str] = TERM_SLUG_ATTRIBUTES;

    fn record_id(&self) -> Option<i64> {
        Some(self.id.into())
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        text_attribute(field, &self.name, self.slug.as_ref(), self.description.as_deref())
    }

    fn assign_slug(&mut self, field: &str, slug: Slug) -> DomainResult<()> {
        store_slug(&mut self.slug, field, slug)
    }
}

#[derive(Debug, Clone)]
pub struct NewTerm {
    pub kind: TaxonomyKind,
    pub name: TermName,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlugSubject for NewTerm {
    const SOURCE_ATTRIBUTES: &'static [&'static str] = TERM_SOURCE_ATTRIBUTES;
    const SLUG_ATTRIBUTES: &'static [&'static str] = TERM_SLUG_ATTRIBUTES;

    fn record_id(&self) -> Option<i64> {
        None
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        text_attribute(field, &self.name, self.slug.as_ref(), self.description.as_deref())
    }

    fn assign_slug(&mut self, field: &str, slug: Slug) -> DomainResult<()> {
        store_slug(&mut self.slug, field, slug)
    }
}

#[derive(Debug, Clone)]
pub struct TermUpdate {
    pub id: TermId,
    pub kind: TaxonomyKind,
    pub name: Option<TermName>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl TermUpdate {
    pub fn between(persisted: &Term, pending: &Term) -> Self {
        Self {
            id: pending.id,
            kind: pending.kind,
            name: (pending.name != persisted.name).then(|| pending.name.clone()),
            slug: pending
                .slug
                .clone()
                .filter(|slug| persisted.slug.as_ref() != Some(slug)),
            description: (pending.description != persisted.description)
                .then(|| pending.description.clone()),
            updated_at: pending.updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.description.is_none()
    }
}
