// src/domain/taxonomy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::entity::{NewTerm, Term, TermUpdate};
use crate::domain::taxonomy::value_objects::{TaxonomyKind, TermId};
use async_trait::async_trait;

#[async_trait]
pub trait TermRepository: Send + Sync {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term>;
    async fn update(&self, update: TermUpdate) -> DomainResult<Term>;
    async fn delete(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<()>;
    async fn find_by_id(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<Option<Term>>;
    async fn find_by_slug(&self, kind: TaxonomyKind, slug: &Slug) -> DomainResult<Option<Term>>;
    /// Alphabetical by name.
    async fn list(&self, kind: TaxonomyKind) -> DomainResult<Vec<Term>>;
}
