pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Listing, ListingUpdate, NewListing};
pub use repository::{ListingReadRepository, ListingWriteRepository};
pub use value_objects::{ListingId, ListingKind, ListingTitle};
