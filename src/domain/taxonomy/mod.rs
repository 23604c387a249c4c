pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTerm, Term, TermUpdate};
pub use repository::TermRepository;
pub use value_objects::{TaxonomyKind, TermId, TermName};
