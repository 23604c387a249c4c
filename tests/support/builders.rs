// tests/support/builders.rs
use std::sync::Arc;

use agent_directory::application::ports::{time::Clock, util::SlugGenerator};
use agent_directory::application::services::{ApplicationServices, SlugOptions};
use agent_directory::domain::listing::{
    Listing, ListingId, ListingKind, ListingTitle, ListingWriteRepository,
};
use agent_directory::domain::slug::Slug;
use agent_directory::domain::taxonomy::{TaxonomyKind, Term, TermId, TermName, TermRepository};
use agent_directory::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{FIXED_NOW, FixedClock, MemoryDirectory};

/// Services wired entirely against `directory`.
pub fn build_services(directory: Arc<MemoryDirectory>) -> ApplicationServices {
    build_services_with(
        Arc::clone(&directory),
        directory,
        SlugOptions::default(),
    )
}

pub fn build_services_with(
    directory: Arc<MemoryDirectory>,
    listing_writes: Arc<dyn ListingWriteRepository>,
    options: SlugOptions,
) -> ApplicationServices {
    let terms = Arc::clone(&directory) as Arc<dyn TermRepository>;
    wire(directory, listing_writes, terms, options)
}

/// Services whose term storage goes through `terms`.
pub fn build_services_with_terms(
    directory: Arc<MemoryDirectory>,
    terms: Arc<dyn TermRepository>,
) -> ApplicationServices {
    let listing_writes = Arc::clone(&directory) as Arc<dyn ListingWriteRepository>;
    wire(directory, listing_writes, terms, SlugOptions::default())
}

fn wire(
    directory: Arc<MemoryDirectory>,
    listing_writes: Arc<dyn ListingWriteRepository>,
    terms: Arc<dyn TermRepository>,
    options: SlugOptions,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(
        listing_writes,
        Arc::clone(&directory) as _,
        terms,
        directory as _,
        clock,
        slugger,
        options,
    )
    .expect("services wire up")
}

pub struct ListingBuilder {
    kind: ListingKind,
    title: String,
    slug: Option<String>,
}

impl ListingBuilder {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            kind,
            title: "Seeded Listing".into(),
            slug: Some("seeded-listing".into()),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// A row imported before slugs existed.
    pub fn legacy(mut self) -> Self {
        self.slug = None;
        self
    }

    pub fn build(self) -> Listing {
        Listing {
            id: ListingId::new(1).unwrap(),
            kind: self.kind,
            title: ListingTitle::new(self.title).unwrap(),
            slug: self.slug.map(|s| Slug::new(s).unwrap()),
            summary: None,
            created_at: *FIXED_NOW,
            updated_at: *FIXED_NOW,
        }
    }
}

pub struct TermBuilder {
    kind: TaxonomyKind,
    name: String,
    slug: Option<String>,
}

impl TermBuilder {
    pub fn new(kind: TaxonomyKind) -> Self {
        Self {
            kind,
            name: "Seeded Term".into(),
            slug: Some("seeded-term".into()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn legacy(mut self) -> Self {
        self.slug = None;
        self
    }

    pub fn build(self) -> Term {
        Term {
            id: TermId::new(1).unwrap(),
            kind: self.kind,
            name: TermName::new(self.name).unwrap(),
            slug: self.slug.map(|s| Slug::new(s).unwrap()),
            description: None,
            created_at: *FIXED_NOW,
            updated_at: *FIXED_NOW,
        }
    }
}
