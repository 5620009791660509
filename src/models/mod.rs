// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, BusinessCandidate, BusinessLocation, BusinessQuery, GeoPoint, ListingCandidate,
    PickupStatus, RankedBusiness, RankedListing, SearchQuery, MAX_LIMIT, MAX_RADIUS_KM,
};
pub use requests::{BusinessSearchParams, ListingSearchParams};
pub use responses::{
    BusinessSearchResponse, ErrorResponse, HealthResponse, ListingSearchResponse, PaginationMeta,
};
