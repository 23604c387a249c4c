use super::TermQueryService;
use crate::{
    application::{dto::TermDto, error::ApplicationResult},
    domain::taxonomy::TaxonomyKind,
};

pub struct ListTermsQuery {
    pub kind: TaxonomyKind,
}

impl TermQueryService {
    pub async fn list_terms(&self, query: ListTermsQuery) -> ApplicationResult<Vec<TermDto>> {
        let terms = self.repo.list(query.kind).await?;
        Ok(terms.into_iter().map(TermDto::from).collect())
    }
}
