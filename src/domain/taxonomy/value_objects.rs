// src/domain/taxonomy/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SlugSettings;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const MAX_NAME_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermId(pub i64);

impl TermId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("term id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TermId> for i64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}

/// Admin-managed classification entities. Terms are named rather than titled,
/// so their slugs are seeded from `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyKind {
    Category,
    Platform,
    AiModel,
    ConfigType,
}

impl TaxonomyKind {
    pub const ALL: [TaxonomyKind; 4] = [
        TaxonomyKind::Category,
        TaxonomyKind::Platform,
        TaxonomyKind::AiModel,
        TaxonomyKind::ConfigType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "category",
            TaxonomyKind::Platform => "platform",
            TaxonomyKind::AiModel => "ai_model",
            TaxonomyKind::ConfigType => "config_type",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "categories",
            TaxonomyKind::Platform => "platforms",
            TaxonomyKind::AiModel => "ai_models",
            TaxonomyKind::ConfigType => "config_types",
        }
    }

    pub fn route_segment(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "categories",
            TaxonomyKind::Platform => "platforms",
            TaxonomyKind::AiModel => "ai-models",
            TaxonomyKind::ConfigType => "config-types",
        }
    }

    pub fn slug_settings(&self) -> DomainResult<SlugSettings> {
        SlugSettings::new(self.table())?.with_source_field("name")
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == s || kind.as_str() == s)
            .ok_or_else(|| DomainError::NotFound(format!("unknown taxonomy `{s}`")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermName(String);

impl TermName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "name cannot exceed {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TermName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
