use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    NewTerm, TaxonomyKind, Term, TermId, TermName, TermRepository, TermUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const TERM_COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTermRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTermRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TermRow {
    fn into_term(self, kind: TaxonomyKind) -> DomainResult<Term> {
        let slug = Some(self.slug)
            .filter(|s| !s.is_empty())
            .map(Slug::new)
            .transpose()
            .map_err(|err| {
                DomainError::Persistence(format!("corrupt slug in {}: {err}", kind.table()))
            })?;

        Ok(Term {
            id: TermId::new(self.id)?,
            kind,
            name: TermName::new(self.name)?,
            slug,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl TermRepository for SqliteTermRepository {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let sql = format!(
            "INSERT INTO {} (name, slug, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {TERM_COLUMNS}",
            term.kind.table()
        );
        let row = sqlx::query_as::<_, TermRow>(&sql)
            .bind(term.name.as_str())
            .bind(term.slug.as_ref().map(Slug::as_str).unwrap_or_default())
            .bind(term.description.as_deref())
            .bind(term.created_at)
            .bind(term.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_term(term.kind)
    }

    async fn update(&self, update: TermUpdate) -> DomainResult<Term> {
        let TermUpdate {
            id,
            kind,
            name,
            slug,
            description,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET updated_at = ", kind.table()));
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {TERM_COLUMNS}"));

        let row = builder
            .build_query_as::<TermRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("term not found".into()))?;

        row.into_term(kind)
    }

    async fn delete(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        sqlx::query(&sql)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<Option<Term>> {
        let sql = format!("SELECT {TERM_COLUMNS} FROM {} WHERE id = ?", kind.table());
        sqlx::query_as::<_, TermRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .map(|row| row.into_term(kind))
            .transpose()
    }

    async fn find_by_slug(&self, kind: TaxonomyKind, slug: &Slug) -> DomainResult<Option<Term>> {
        let sql = format!("SELECT {TERM_COLUMNS} FROM {} WHERE slug = ?", kind.table());
        sqlx::query_as::<_, TermRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .map(|row| row.into_term(kind))
            .transpose()
    }

    async fn list(&self, kind: TaxonomyKind) -> DomainResult<Vec<Term>> {
        let sql = format!(
            "SELECT {TERM_COLUMNS} FROM {} ORDER BY name COLLATE NOCASE ASC, id ASC",
            kind.table()
        );
        let rows = sqlx::query_as::<_, TermRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(|row| row.into_term(kind)).collect()
    }
}
