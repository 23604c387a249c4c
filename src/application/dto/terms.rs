use crate::domain::taxonomy::{TaxonomyKind, Term};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDto {
    pub id: i64,
    pub kind: TaxonomyKind,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Term> for TermDto {
    fn from(term: Term) -> Self {
        Self {
            id: term.id.into(),
            kind: term.kind,
            name: term.name.into_inner(),
            slug: term.slug.map(String::from).unwrap_or_default(),
            description: term.description,
            created_at: term.created_at,
            updated_at: term.updated_at,
        }
    }
}
