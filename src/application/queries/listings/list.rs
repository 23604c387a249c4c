use super::ListingQueryService;
use crate::{
    application::{dto::ListingDto, error::ApplicationResult},
    domain::listing::ListingKind,
};

pub struct ListListingsQuery {
    pub kind: ListingKind,
}

impl ListingQueryService {
    pub async fn list_listings(&self, query: ListListingsQuery) -> ApplicationResult<Vec<ListingDto>> {
        let listings = self.read_repo.list(query.kind).await?;
        Ok(listings.into_iter().map(ListingDto::from).collect())
    }
}
