// src/application/commands/terms/service.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        slug::SlugAssigner,
        taxonomy::{TaxonomyKind, TermRepository},
    },
};

pub struct TermCommandService {
    pub(super) repo: Arc<dyn TermRepository>,
    pub(super) slug_assigners: HashMap<TaxonomyKind, Arc<SlugAssigner>>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl TermCommandService {
    pub fn new(
        repo: Arc<dyn TermRepository>,
        slug_assigners: HashMap<TaxonomyKind, Arc<SlugAssigner>>,
        clock: Arc<dyn Clock>,
        conflict_retries: u32,
    ) -> Self {
        Self {
            repo,
            slug_assigners,
            clock,
            conflict_retries,
        }
    }

    pub(super) fn slug_assigner(&self, kind: TaxonomyKind) -> ApplicationResult<&SlugAssigner> {
        self.slug_assigners
            .get(&kind)
            .map(Arc::as_ref)
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!("no slug assigner registered for {kind}"))
            })
    }
}
