use std::sync::Arc;

use crate::domain::listing::ListingReadRepository;

pub struct ListingQueryService {
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
}

impl ListingQueryService {
    pub fn new(read_repo: Arc<dyn ListingReadRepository>) -> Self {
        Self { read_repo }
    }
}
