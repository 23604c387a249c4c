use std::sync::Arc;

use crate::domain::taxonomy::TermRepository;

pub struct TermQueryService {
    pub(super) repo: Arc<dyn TermRepository>,
}

impl TermQueryService {
    pub fn new(repo: Arc<dyn TermRepository>) -> Self {
        Self { repo }
    }
}
