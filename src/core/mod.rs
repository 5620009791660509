// Core engine exports
pub mod engine;
pub mod error;
pub mod filters;
pub mod geo;
pub mod paginate;
pub mod pickup;
pub mod ranking;

pub use engine::SearchEngine;
pub use error::SearchError;
pub use filters::ListingFilters;
pub use geo::{bounding_box, haversine_km};
pub use paginate::{paginate, Page};
pub use pickup::{classify, remaining_hours, UrgencyThresholds};
pub use ranking::{rank_businesses, rank_listings, RankingMode};
