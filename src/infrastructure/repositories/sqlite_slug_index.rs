use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugIndex, SlugSettings};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Existence checks against whichever table a [`SlugSettings`] names. The
/// identifiers were validated when the settings were built.
#[derive(Clone)]
pub struct SqliteSlugIndex {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugIndex {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn exists_sql(settings: &SlugSettings) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {table} WHERE {slug} = ? AND (? IS NULL OR {pk} <> ?))",
        table = settings.table(),
        slug = settings.slug_field(),
        pk = settings.primary_key(),
    )
}

#[async_trait]
impl SlugIndex for SqliteSlugIndex {
    async fn slug_taken(
        &self,
        settings: &SlugSettings,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        let sql = exists_sql(settings);
        let taken: i64 = sqlx::query_scalar(&sql)
            .bind(candidate)
            .bind(exclude_id)
            .bind(exclude_id)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(taken != 0)
    }
}
