// src/domain/slug/repository.rs
use super::value_objects::SlugSettings;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait SlugIndex: Send + Sync {
    /// Whether any row in `settings.table()` other than `exclude_id` already
    /// holds `candidate` in its slug column.
    async fn slug_taken(
        &self,
        settings: &SlugSettings,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool>;
}
