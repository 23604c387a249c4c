// src/application/services/mod.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        commands::{listings::ListingCommandService, terms::TermCommandService},
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
        queries::{listings::ListingQueryService, terms::TermQueryService},
    },
    domain::{
        listing::{Listing, ListingKind, ListingReadRepository, ListingWriteRepository},
        slug::{SlugAssigner, SlugIndex, SlugSettings, value_objects},
        taxonomy::{TaxonomyKind, Term, TermRepository},
    },
};

/// Knobs shared by every slug assigner.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    pub fallback_prefix: String,
    /// `None` probes without limit.
    pub max_probes: Option<u64>,
    pub conflict_retries: u32,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            fallback_prefix: value_objects::DEFAULT_FALLBACK_PREFIX.into(),
            max_probes: Some(value_objects::DEFAULT_MAX_PROBES),
            conflict_retries: 3,
        }
    }
}

impl SlugOptions {
    fn apply(&self, settings: SlugSettings) -> ApplicationResult<SlugSettings> {
        Ok(settings
            .with_fallback_prefix(self.fallback_prefix.clone())?
            .with_max_probes(self.max_probes))
    }
}

pub struct ApplicationServices {
    pub listing_commands: Arc<ListingCommandService>,
    pub listing_queries: Arc<ListingQueryService>,
    pub term_commands: Arc<TermCommandService>,
    pub term_queries: Arc<TermQueryService>,
}

impl ApplicationServices {
    pub fn new(
        listing_write_repo: Arc<dyn ListingWriteRepository>,
        listing_read_repo: Arc<dyn ListingReadRepository>,
        term_repo: Arc<dyn TermRepository>,
        slug_index: Arc<dyn SlugIndex>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_options: SlugOptions,
    ) -> ApplicationResult<Self> {
        let mut listing_assigners = HashMap::new();
        for kind in ListingKind::ALL {
            let assigner = SlugAssigner::for_subject::<Listing>(
                slug_options.apply(kind.slug_settings()?)?,
                Arc::clone(&slug_index),
                Arc::clone(&slugger),
                Arc::clone(&clock),
            )?;
            listing_assigners.insert(kind, Arc::new(assigner));
        }

        let mut term_assigners = HashMap::new();
        for kind in TaxonomyKind::ALL {
            let assigner = SlugAssigner::for_subject::<Term>(
                slug_options.apply(kind.slug_settings()?)?,
                Arc::clone(&slug_index),
                Arc::clone(&slugger),
                Arc::clone(&clock),
            )?;
            term_assigners.insert(kind, Arc::new(assigner));
        }

        let listing_commands = Arc::new(ListingCommandService::new(
            Arc::clone(&listing_write_repo),
            Arc::clone(&listing_read_repo),
            listing_assigners,
            Arc::clone(&clock),
            slug_options.conflict_retries,
        ));
        let listing_queries = Arc::new(ListingQueryService::new(Arc::clone(&listing_read_repo)));

        let term_commands = Arc::new(TermCommandService::new(
            Arc::clone(&term_repo),
            term_assigners,
            Arc::clone(&clock),
            slug_options.conflict_retries,
        ));
        let term_queries = Arc::new(TermQueryService::new(Arc::clone(&term_repo)));

        Ok(Self {
            listing_commands,
            listing_queries,
            term_commands,
            term_queries,
        })
    }
}
