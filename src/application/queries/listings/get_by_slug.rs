use super::ListingQueryService;
use crate::{
    application::{
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{listing::ListingKind, slug::Slug},
};

pub struct GetListingBySlugQuery {
    pub kind: ListingKind,
    pub slug: String,
}

impl ListingQueryService {
    pub async fn get_listing_by_slug(&self, query: GetListingBySlugQuery) -> ApplicationResult<ListingDto> {
        // A malformed slug cannot match any row.
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("listing not found"))?;
        self.read_repo
            .find_by_slug(query.kind, &slug)
            .await?
            .map(ListingDto::from)
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }
}
