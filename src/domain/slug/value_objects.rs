// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const DEFAULT_SOURCE_FIELD: &str = "title";
pub const DEFAULT_SLUG_FIELD: &str = "slug";
pub const DEFAULT_PRIMARY_KEY: &str = "id";
pub const DEFAULT_FALLBACK_PREFIX: &str = "item";
pub const DEFAULT_MAX_PROBES: u64 = 10_000;

/// URL-safe identifier: lowercase ASCII alphanumerics separated by single
/// hyphens, never starting or ending with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_url_safe(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase ascii words separated by single hyphens"
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

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

fn is_url_safe(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Collapse arbitrary text into slug shape. Runs of anything other than ASCII
/// alphanumerics become one hyphen; edge hyphens are dropped. May return an
/// empty string.
pub fn normalize_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    out
}

fn ensure_identifier(kind: &str, value: &str) -> DomainResult<()> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "{kind} `{value}` is not a valid column or table identifier"
        )))
    }
}

/// Per entity-type slug configuration: where slugs live and how they are seeded.
///
/// Table and column names end up in SQL text, so every setter validates them
/// as plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugSettings {
    table: String,
    source_field: String,
    slug_field: String,
    primary_key: String,
    fallback_prefix: String,
    max_probes: Option<u64>,
}

impl SlugSettings {
    pub fn new(table: impl Into<String>) -> DomainResult<Self> {
        let table = table.into();
        ensure_identifier("table", &table)?;
        Ok(Self {
            table,
            source_field: DEFAULT_SOURCE_FIELD.into(),
            slug_field: DEFAULT_SLUG_FIELD.into(),
            primary_key: DEFAULT_PRIMARY_KEY.into(),
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.into(),
            max_probes: Some(DEFAULT_MAX_PROBES),
        })
    }

    pub fn with_source_field(mut self, field: impl Into<String>) -> DomainResult<Self> {
        let field = field.into();
        ensure_identifier("source field", &field)?;
        self.source_field = field;
        Ok(self)
    }

    pub fn with_slug_field(mut self, field: impl Into<String>) -> DomainResult<Self> {
        let field = field.into();
        ensure_identifier("slug field", &field)?;
        self.slug_field = field;
        Ok(self)
    }

    pub fn with_primary_key(mut self, field: impl Into<String>) -> DomainResult<Self> {
        let field = field.into();
        ensure_identifier("primary key", &field)?;
        self.primary_key = field;
        Ok(self)
    }

    /// The prefix is itself used as a slug fragment, so it must already be a
    /// valid slug.
    pub fn with_fallback_prefix(mut self, prefix: impl Into<String>) -> DomainResult<Self> {
        let prefix = prefix.into();
        Slug::new(prefix.clone())?;
        self.fallback_prefix = prefix;
        Ok(self)
    }

    /// `None` disables the ceiling.
    pub fn with_max_probes(mut self, max_probes: Option<u64>) -> Self {
        self.max_probes = max_probes;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    pub fn slug_field(&self) -> &str {
        &self.slug_field
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn fallback_prefix(&self) -> &str {
        &self.fallback_prefix
    }

    pub fn max_probes(&self) -> Option<u64> {
        self.max_probes
    }
}
