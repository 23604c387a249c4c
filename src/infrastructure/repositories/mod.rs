// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_listing;
mod sqlite_slug_index;
mod sqlite_term;

pub use error::map_sqlx;
pub use sqlite_listing::{SqliteListingReadRepository, SqliteListingWriteRepository};
pub use sqlite_slug_index::SqliteSlugIndex;
pub use sqlite_term::SqliteTermRepository;
