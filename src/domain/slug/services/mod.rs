// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    repository::SlugIndex,
    subject::SlugSubject,
    value_objects::{Slug, SlugSettings, normalize_slug},
};

/// Domain service responsible for producing unique slugs for one entity type.
///
/// The two lifecycle hooks are called explicitly by the command services:
/// [`SlugAssigner::assign_on_create`] right before an insert and
/// [`SlugAssigner::maybe_reassign_on_update`] right before an update.
pub struct SlugAssigner {
    settings: SlugSettings,
    index: Arc<dyn SlugIndex>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl SlugAssigner {
    /// Build an assigner for subjects of type `S`, rejecting settings that name
    /// attributes `S` does not have.
    pub fn for_subject<S: SlugSubject>(
        settings: SlugSettings,
        index: Arc<dyn SlugIndex>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        if !S::SOURCE_ATTRIBUTES.contains(&settings.source_field()) {
            return Err(DomainError::Validation(format!(
                "`{}` is not a slug source attribute for table `{}`",
                settings.source_field(),
                settings.table()
            )));
        }
        if !S::SLUG_ATTRIBUTES.contains(&settings.slug_field()) {
            return Err(DomainError::Validation(format!(
                "`{}` is not a slug attribute for table `{}`",
                settings.slug_field(),
                settings.table()
            )));
        }

        Ok(Self {
            settings,
            index,
            generator,
            clock,
        })
    }

    /// Normalized base slug for `source`, or the timestamp fallback when
    /// nothing usable survives normalization.
    pub fn base_slug(&self, source: &str) -> String {
        let base = normalize_slug(&self.generator.slugify(source));
        if base.is_empty() {
            format!(
                "{}-{}",
                self.settings.fallback_prefix(),
                self.clock.now().timestamp()
            )
        } else {
            base
        }
    }

    pub async fn generate_unique_slug<S: SlugSubject>(&self, subject: &S) -> DomainResult<Slug> {
        let source = subject
            .attribute(self.settings.source_field())
            .unwrap_or_default();
        self.unique_slug_for(source, subject.record_id()).await
    }

    /// Probe `base`, then `base-1`, `base-2`, … and return the first candidate
    /// not held by any row other than `exclude_id`. Every call restarts at 1.
    pub async fn unique_slug_for(&self, source: &str, exclude_id: Option<i64>) -> DomainResult<Slug> {
        let base = self.base_slug(source);

        if !self.is_taken(&base, exclude_id).await? {
            return Slug::new(base);
        }

        let mut counter: u64 = 1;
        loop {
            if let Some(max) = self.settings.max_probes() {
                if counter > max {
                    tracing::error!(
                        table = self.settings.table(),
                        base = %base,
                        max_probes = max,
                        "slug probe ceiling exceeded"
                    );
                    return Err(DomainError::Conflict(format!(
                        "no free slug for `{base}` after {max} attempts"
                    )));
                }
            }

            let candidate = format!("{base}-{counter}");
            if !self.is_taken(&candidate, exclude_id).await? {
                tracing::debug!(
                    table = self.settings.table(),
                    base = %base,
                    slug = %candidate,
                    "resolved slug collision"
                );
                return Slug::new(candidate);
            }
            counter += 1;
        }
    }

    /// Creation hook. Fills an empty slug; a caller supplied slug is kept as is.
    /// Returns whether a slug was generated.
    pub async fn assign_on_create<S: SlugSubject>(&self, subject: &mut S) -> DomainResult<bool> {
        let slug_field = self.settings.slug_field();
        if subject.attribute(slug_field).is_some_and(|s| !s.is_empty()) {
            return Ok(false);
        }

        let slug = self.generate_unique_slug(&*subject).await?;
        subject.assign_slug(slug_field, slug)?;
        Ok(true)
    }

    /// Update hook. Regenerates only when the source attribute changed and the
    /// persisted slug was empty; a non-empty slug is never rewritten.
    pub async fn maybe_reassign_on_update<S: SlugSubject>(
        &self,
        persisted: &S,
        pending: &mut S,
    ) -> DomainResult<bool> {
        let source_field = self.settings.source_field();
        let slug_field = self.settings.slug_field();

        let source_dirty = persisted.attribute(source_field).unwrap_or_default()
            != pending.attribute(source_field).unwrap_or_default();
        let slug_was_empty = persisted.attribute(slug_field).is_none_or(str::is_empty);

        if !(source_dirty && slug_was_empty) {
            return Ok(false);
        }

        let slug = self.generate_unique_slug(&*pending).await?;
        pending.assign_slug(slug_field, slug)?;
        Ok(true)
    }

    async fn is_taken(&self, candidate: &str, exclude_id: Option<i64>) -> DomainResult<bool> {
        self.index
            .slug_taken(&self.settings, candidate, exclude_id)
            .await
    }
}
