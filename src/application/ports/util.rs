// src/application/ports/util.rs

/// Turns display text into a slug-shaped string. Implementations may return an
/// empty string when nothing transliterates.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
