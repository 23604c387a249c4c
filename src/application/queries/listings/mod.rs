mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetListingBySlugQuery;
pub use list::ListListingsQuery;
pub use service::ListingQueryService;
