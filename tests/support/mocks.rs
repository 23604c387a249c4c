// tests/support/mocks.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use agent_directory::application::ports::time::Clock;
use agent_directory::domain::errors::{DomainError, DomainResult};
use agent_directory::domain::listing::{
    Listing, ListingId, ListingKind, ListingReadRepository, ListingUpdate, ListingWriteRepository,
    NewListing,
};
use agent_directory::domain::slug::{Slug, SlugIndex, SlugSettings};
use agent_directory::domain::taxonomy::{
    NewTerm, TaxonomyKind, Term, TermId, TermName, TermRepository, TermUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

pub static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
});

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

fn slug_conflict() -> DomainError {
    DomainError::Conflict("slug already exists".into())
}

fn excluded(id: i64, exclude_id: Option<i64>) -> bool {
    exclude_id.is_some_and(|excluded| excluded == id)
}

/// In-memory stand-in for the SQLite tables. Listings and terms share one id
/// sequence; uniqueness is enforced per kind like the partial unique indexes.
#[derive(Default)]
pub struct MemoryDirectory {
    listings: Mutex<Vec<Listing>>,
    terms: Mutex<Vec<Term>>,
    next_id: AtomicI64,
    probes: AtomicI64,
}

impl MemoryDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store a listing exactly as given, bypassing slug assignment.
    pub fn seed_listing(&self, mut listing: Listing) -> Listing {
        listing.id = ListingId::new(self.next_id()).expect("positive id");
        self.listings.lock().unwrap().push(listing.clone());
        listing
    }

    pub fn seed_term(&self, mut term: Term) -> Term {
        term.id = TermId::new(self.next_id()).expect("positive id");
        self.terms.lock().unwrap().push(term.clone());
        term
    }

    pub fn listing_count(&self, kind: ListingKind) -> usize {
        self.listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Number of `slug_taken` calls served so far.
    pub fn probe_count(&self) -> i64 {
        self.probes.load(Ordering::SeqCst)
    }

    fn listing_slug_taken(&self, kind: ListingKind, slug: &str, exclude_id: Option<i64>) -> bool {
        self.listings.lock().unwrap().iter().any(|l| {
            l.kind == kind && l.route_key() == Some(slug) && !excluded(l.id.into(), exclude_id)
        })
    }

    fn term_slug_taken(&self, kind: TaxonomyKind, slug: &str, exclude_id: Option<i64>) -> bool {
        self.terms.lock().unwrap().iter().any(|t| {
            t.kind == kind && t.route_key() == Some(slug) && !excluded(t.id.into(), exclude_id)
        })
    }
}

#[async_trait]
impl SlugIndex for MemoryDirectory {
    async fn slug_taken(
        &self,
        settings: &SlugSettings,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = ListingKind::ALL
            .into_iter()
            .find(|k| k.table() == settings.table())
        {
            return Ok(self.listing_slug_taken(kind, candidate, exclude_id));
        }
        if let Some(kind) = TaxonomyKind::ALL
            .into_iter()
            .find(|k| k.table() == settings.table())
        {
            return Ok(self.term_slug_taken(kind, candidate, exclude_id));
        }
        Err(DomainError::Persistence(format!(
            "no such table: {}",
            settings.table()
        )))
    }
}

#[async_trait]
impl ListingWriteRepository for MemoryDirectory {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        if let Some(slug) = &listing.slug {
            if self.listing_slug_taken(listing.kind, slug.as_str(), None) {
                return Err(slug_conflict());
            }
        }
        let created = Listing {
            id: ListingId::new(self.next_id())?,
            kind: listing.kind,
            title: listing.title,
            slug: listing.slug,
            summary: listing.summary,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        };
        self.listings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        if let Some(slug) = &update.slug {
            if self.listing_slug_taken(update.kind, slug.as_str(), Some(update.id.into())) {
                return Err(slug_conflict());
            }
        }
        let mut listings = self.listings.lock().unwrap();
        let listing = listings
            .iter_mut()
            .find(|l| l.kind == update.kind && l.id == update.id)
            .ok_or_else(|| DomainError::NotFound("listing not found".into()))?;
        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(slug) = update.slug {
            listing.slug = Some(slug);
        }
        if let Some(summary) = update.summary {
            listing.summary = summary;
        }
        listing.updated_at = update.updated_at;
        Ok(listing.clone())
    }

    async fn delete(&self, kind: ListingKind, id: ListingId) -> DomainResult<()> {
        self.listings
            .lock()
            .unwrap()
            .retain(|l| !(l.kind == kind && l.id == id));
        Ok(())
    }
}

#[async_trait]
impl ListingReadRepository for MemoryDirectory {
    async fn find_by_id(&self, kind: ListingKind, id: ListingId) -> DomainResult<Option<Listing>> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.kind == kind && l.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, kind: ListingKind, slug: &Slug) -> DomainResult<Option<Listing>> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.kind == kind && l.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self, kind: ListingKind) -> DomainResult<Vec<Listing>> {
        let mut listings: Vec<_> = self
            .listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.kind == kind)
            .cloned()
            .collect();
        listings.reverse();
        Ok(listings)
    }
}

#[async_trait]
impl TermRepository for MemoryDirectory {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        if let Some(slug) = &term.slug {
            if self.term_slug_taken(term.kind, slug.as_str(), None) {
                return Err(slug_conflict());
            }
        }
        let created = Term {
            id: TermId::new(self.next_id())?,
            kind: term.kind,
            name: term.name,
            slug: term.slug,
            description: term.description,
            created_at: term.created_at,
            updated_at: term.updated_at,
        };
        self.terms.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TermUpdate) -> DomainResult<Term> {
        if let Some(slug) = &update.slug {
            if self.term_slug_taken(update.kind, slug.as_str(), Some(update.id.into())) {
                return Err(slug_conflict());
            }
        }
        let mut terms = self.terms.lock().unwrap();
        let term = terms
            .iter_mut()
            .find(|t| t.kind == update.kind && t.id == update.id)
            .ok_or_else(|| DomainError::NotFound("term not found".into()))?;
        if let Some(name) = update.name {
            term.name = name;
        }
        if let Some(slug) = update.slug {
            term.slug = Some(slug);
        }
        if let Some(description) = update.description {
            term.description = description;
        }
        term.updated_at = update.updated_at;
        Ok(term.clone())
    }

    async fn delete(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<()> {
        self.terms
            .lock()
            .unwrap()
            .retain(|t| !(t.kind == kind && t.id == id));
        Ok(())
    }

    async fn find_by_id(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<Option<Term>> {
        Ok(self
            .terms
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.kind == kind && t.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, kind: TaxonomyKind, slug: &Slug) -> DomainResult<Option<Term>> {
        Ok(self
            .terms
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.kind == kind && t.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self, kind: TaxonomyKind) -> DomainResult<Vec<Term>> {
        let mut terms: Vec<_> = self
            .terms
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.kind == kind)
            .cloned()
            .collect();
        terms.sort_by(|a, b| a.name.as_str().to_lowercase().cmp(&b.name.as_str().to_lowercase()));
        Ok(terms)
    }
}

/// Write repository that lets a competing writer claim the caller's slug
/// between the uniqueness probe and the first insert or slug-changing update.
pub struct RacingListingWrites {
    inner: Arc<MemoryDirectory>,
    raced: AtomicBool,
}

impl RacingListingWrites {
    pub fn new(inner: Arc<MemoryDirectory>) -> Self {
        Self {
            inner,
            raced: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ListingWriteRepository for RacingListingWrites {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        if !self.raced.swap(true, Ordering::SeqCst) {
            let mut competitor = listing.clone();
            competitor.summary = Some("inserted concurrently".into());
            ListingWriteRepository::insert(self.inner.as_ref(), competitor).await?;
        }
        ListingWriteRepository::insert(self.inner.as_ref(), listing).await
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        if let Some(slug) = &update.slug {
            if !self.raced.swap(true, Ordering::SeqCst) {
                let competitor = NewListing {
                    kind: update.kind,
                    title: update.title.clone().unwrap_or_default(),
                    slug: Some(slug.clone()),
                    summary: Some("inserted concurrently".into()),
                    created_at: update.updated_at,
                    updated_at: update.updated_at,
                };
                ListingWriteRepository::insert(self.inner.as_ref(), competitor).await?;
            }
        }
        ListingWriteRepository::update(self.inner.as_ref(), update).await
    }

    async fn delete(&self, kind: ListingKind, id: ListingId) -> DomainResult<()> {
        ListingWriteRepository::delete(self.inner.as_ref(), kind, id).await
    }
}

/// Term counterpart of [`RacingListingWrites`].
pub struct RacingTermWrites {
    inner: Arc<MemoryDirectory>,
    raced: AtomicBool,
}

impl RacingTermWrites {
    pub fn new(inner: Arc<MemoryDirectory>) -> Self {
        Self {
            inner,
            raced: AtomicBool::new(false),
        }
    }

    async fn claim(&self, kind: TaxonomyKind, slug: &Slug, at: DateTime<Utc>) -> DomainResult<()> {
        if self.raced.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let competitor = NewTerm {
            kind,
            name: TermName::new("Competing Term")?,
            slug: Some(slug.clone()),
            description: None,
            created_at: at,
            updated_at: at,
        };
        TermRepository::insert(self.inner.as_ref(), competitor).await?;
        Ok(())
    }
}

#[async_trait]
impl TermRepository for RacingTermWrites {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        if let Some(slug) = &term.slug {
            self.claim(term.kind, slug, term.created_at).await?;
        }
        TermRepository::insert(self.inner.as_ref(), term).await
    }

    async fn update(&self, update: TermUpdate) -> DomainResult<Term> {
        if let Some(slug) = &update.slug {
            self.claim(update.kind, slug, update.updated_at).await?;
        }
        TermRepository::update(self.inner.as_ref(), update).await
    }

    async fn delete(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<()> {
        TermRepository::delete(self.inner.as_ref(), kind, id).await
    }

    async fn find_by_id(&self, kind: TaxonomyKind, id: TermId) -> DomainResult<Option<Term>> {
        TermRepository::find_by_id(self.inner.as_ref(), kind, id).await
    }

    async fn find_by_slug(&self, kind: TaxonomyKind, slug: &Slug) -> DomainResult<Option<Term>> {
        TermRepository::find_by_slug(self.inner.as_ref(), kind, slug).await
    }

    async fn list(&self, kind: TaxonomyKind) -> DomainResult<Vec<Term>> {
        TermRepository::list(self.inner.as_ref(), kind).await
    }
}
