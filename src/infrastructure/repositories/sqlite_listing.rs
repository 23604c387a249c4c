use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{
    Listing, ListingId, ListingKind, ListingReadRepository, ListingTitle, ListingUpdate,
    ListingWriteRepository, NewListing,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const LISTING_COLUMNS: &str = "id, title, slug, summary, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteListingWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteListingWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteListingReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteListingReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    title: String,
    slug: String,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ListingRow {
    fn into_listing(self, kind: ListingKind) -> DomainResult<Listing> {
        let slug = if self.slug.is_empty() {
            None
        } else {
            Some(Slug::new(self.slug).map_err(|err| {
                DomainError::Persistence(format!("corrupt slug in {}: {err}", kind.table()))
            })?)
        };

        Ok(Listing {
            id: ListingId::new(self.id)?,
            kind,
            title: ListingTitle::new(self.title)?,
            slug,
            summary: self.summary,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl ListingWriteRepository for SqliteListingWriteRepository {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        let NewListing {
            kind,
            title,
            slug,
            summary,
            created_at,
            updated_at,
        } = listing;

        let sql = format!(
            "INSERT INTO {} (title, slug, summary, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {LISTING_COLUMNS}",
            kind.table()
        );
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_ref().map(Slug::as_str).unwrap_or_default())
            .bind(summary)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_listing(kind)
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        let ListingUpdate {
            id,
            kind,
            title,
            slug,
            summary,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET updated_at = ", kind.table()));
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {LISTING_COLUMNS}"));

        let row = builder
            .build_query_as::<ListingRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("listing not found".into()))?;

        row.into_listing(kind)
    }

    async fn delete(&self, kind: ListingKind, id: ListingId) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        sqlx::query(&sql)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ListingReadRepository for SqliteListingReadRepository {
    async fn find_by_id(&self, kind: ListingKind, id: ListingId) -> DomainResult<Option<Listing>> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM {} WHERE id = ?", kind.table());
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|r| r.into_listing(kind)).transpose()
    }

    async fn find_by_slug(&self, kind: ListingKind, slug: &Slug) -> DomainResult<Option<Listing>> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM {} WHERE slug = ?", kind.table());
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|r| r.into_listing(kind)).transpose()
    }

    async fn list(&self, kind: ListingKind) -> DomainResult<Vec<Listing>> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM {} ORDER BY created_at DESC, id DESC",
            kind.table()
        );
        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(|r| r.into_listing(kind)).collect()
    }
}
