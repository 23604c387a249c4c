pub mod listings;
pub mod terms;

pub use listings::ListingDto;
pub use terms::TermDto;
