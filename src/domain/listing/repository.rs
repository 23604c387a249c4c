// src/domain/listing/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::entity::{Listing, ListingUpdate, NewListing};
use crate::domain::listing::value_objects::{ListingId, ListingKind};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ListingWriteRepository: Send + Sync {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing>;
    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing>;
    async fn delete(&self, kind: ListingKind, id: ListingId) -> DomainResult<()>;
}

#[async_trait]
pub trait ListingReadRepository: Send + Sync {
    async fn find_by_id(&self, kind: ListingKind, id: ListingId) -> DomainResult<Option<Listing>>;
    async fn find_by_slug(&self, kind: ListingKind, slug: &Slug) -> DomainResult<Option<Listing>>;
    /// Newest first.
    async fn list(&self, kind: ListingKind) -> DomainResult<Vec<Listing>>;
}
