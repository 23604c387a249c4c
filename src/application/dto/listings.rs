use crate::domain::listing::{Listing, ListingKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDto {
    pub id: i64,
    pub kind: ListingKind,
    pub title: String,
    /// Empty only for legacy rows that never received a slug.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.into(),
            kind: listing.kind,
            title: listing.title.into_inner(),
            slug: listing.slug.map(String::from).unwrap_or_default(),
            summary: listing.summary,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}
