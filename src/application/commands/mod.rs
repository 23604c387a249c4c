// src/application/commands/mod.rs
pub mod listings;
pub mod terms;

use crate::domain::errors::DomainError;

/// A write that lost a slug race is retried only when the slug came from the
/// assigner; a caller supplied slug surfaces the conflict.
pub(crate) fn should_retry_slug_conflict(
    err: &DomainError,
    slug_generated: bool,
    attempt: u32,
    max_retries: u32,
) -> bool {
    err.is_conflict() && slug_generated && attempt < max_retries
}

/// Trim free text; blank becomes `None`.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
