// src/domain/listing/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SlugSettings;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingId(pub i64);

impl ListingId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("listing id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ListingId> for i64 {
    fn from(value: ListingId) -> Self {
        value.0
    }
}

/// User-submitted directory content. Each kind is stored in its own table, so
/// slugs are unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Agent,
    McpServer,
    Prompt,
    Skill,
}

impl ListingKind {
    pub const ALL: [ListingKind; 4] = [
        ListingKind::Agent,
        ListingKind::McpServer,
        ListingKind::Prompt,
        ListingKind::Skill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Agent => "agent",
            ListingKind::McpServer => "mcp_server",
            ListingKind::Prompt => "prompt",
            ListingKind::Skill => "skill",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            ListingKind::Agent => "agents",
            ListingKind::McpServer => "mcp_servers",
            ListingKind::Prompt => "prompts",
            ListingKind::Skill => "skills",
        }
    }

    /// Plural, hyphenated form used in URLs.
    pub fn route_segment(&self) -> &'static str {
        match self {
            ListingKind::Agent => "agents",
            ListingKind::McpServer => "mcp-servers",
            ListingKind::Prompt => "prompts",
            ListingKind::Skill => "skills",
        }
    }

    pub fn slug_settings(&self) -> DomainResult<SlugSettings> {
        SlugSettings::new(self.table())
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == s || kind.as_str() == s)
            .ok_or_else(|| DomainError::NotFound(format!("unknown listing kind `{s}`")))
    }
}

/// Display title. Blank titles are allowed; they get a placeholder slug.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingTitle(String);

impl ListingTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_CHARS} characters"
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

impl fmt::Display for ListingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingTitle> for String {
    fn from(value: ListingTitle) -> Self {
        value.0
    }
}
