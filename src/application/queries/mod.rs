pub mod listings;
pub mod terms;
