use super::TermQueryService;
use crate::{
    application::{
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::Slug, taxonomy::TaxonomyKind},
};

pub struct GetTermBySlugQuery {
    pub kind: TaxonomyKind,
    pub slug: String,
}

impl TermQueryService {
    pub async fn get_term_by_slug(&self, query: GetTermBySlugQuery) -> ApplicationResult<TermDto> {
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("term not found"))?;
        self.repo
            .find_by_slug(query.kind, &slug)
            .await?
            .map(TermDto::from)
            .ok_or_else(|| ApplicationError::not_found("term not found"))
    }
}
