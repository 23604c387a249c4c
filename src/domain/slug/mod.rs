pub mod repository;
pub mod services;
pub mod subject;
pub mod value_objects;

pub use repository::SlugIndex;
pub use services::SlugAssigner;
pub use subject::SlugSubject;
pub use value_objects::{Slug, SlugSettings, normalize_slug};
