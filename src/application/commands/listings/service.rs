// src/application/commands/listings/service.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        listing::{ListingKind, ListingReadRepository, ListingWriteRepository},
        slug::SlugAssigner,
    },
};

pub struct ListingCommandService {
    pub(super) write_repo: Arc<dyn ListingWriteRepository>,
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
    pub(super) slug_assigners: HashMap<ListingKind, Arc<SlugAssigner>>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl ListingCommandService {
    pub fn new(
        write_repo: Arc<dyn ListingWriteRepository>,
        read_repo: Arc<dyn ListingReadRepository>,
        slug_assigners: HashMap<ListingKind, Arc<SlugAssigner>>,
        clock: Arc<dyn Clock>,
        conflict_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_assigners,
            clock,
            conflict_retries,
        }
    }

    pub(super) fn slug_assigner(&self, kind: ListingKind) -> ApplicationResult<&SlugAssigner> {
        self.slug_assigners
            .get(&kind)
            .map(Arc::as_ref)
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!("no slug assigner registered for {kind}"))
            })
    }
}
