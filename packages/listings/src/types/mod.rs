pub mod filters;
pub mod listing;

pub use filters::SearchFilters;
pub use listing::Listing;
