pub mod filters;
pub mod generator;
pub mod listing;

pub use filters::{apply_filters, FilterSettings};
pub use listing::Listing;
