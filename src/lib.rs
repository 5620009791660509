//! Savr Search - proximity search and ranking engine for the Savr
//! surplus-food marketplace
//!
//! Answers "what listings/businesses are near this point, matching these
//! filters, ordered by relevance and urgency": bounding-box pre-filter,
//! exact haversine radius cut, pickup-window urgency classification,
//! predicate filtering, deterministic ranking, pagination.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    bounding_box, haversine_km, paginate, Page, RankingMode, SearchEngine, SearchError,
    UrgencyThresholds,
};
pub use models::{
    BusinessCandidate, BusinessQuery, GeoPoint, ListingCandidate, PickupStatus, RankedBusiness,
    RankedListing, SearchQuery,
};
pub use services::{CandidateSource, Clock, FixedClock, InMemorySource, SystemClock};
