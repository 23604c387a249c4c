mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetTermBySlugQuery;
pub use list::ListTermsQuery;
pub use service::TermQueryService;
