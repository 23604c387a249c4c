// src/domain/slug/subject.rs
use super::value_objects::Slug;
use crate::domain::errors::DomainResult;

/// A record whose slug is derived from one of its own text attributes.
///
/// Both unsaved drafts and persisted rows implement this; `record_id` tells
/// them apart. Dirty checks compare a persisted snapshot with a pending copy.
pub trait SlugSubject {
    /// Text attributes that may seed a slug.
    const SOURCE_ATTRIBUTES: &'static [&'static str];
    /// Attributes that may store a slug.
    const SLUG_ATTRIBUTES: &'static [&'static str];

    /// Primary key, or `None` while the record has never been stored.
    fn record_id(&self) -> Option<i64>;

    /// Current value of a text attribute. `None` and `Some("")` are both empty.
    fn attribute(&self, field: &str) -> Option<&str>;

    fn assign_slug(&mut self, field: &str, slug: Slug) -> DomainResult<()>;

    fn is_new(&self) -> bool {
        self.record_id().is_none()
    }
}
