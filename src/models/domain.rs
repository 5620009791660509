use serde::{Deserialize, Serialize};

use crate::core::ranking::RankingMode;

/// Hard limits from the documented search contract.
pub const MAX_RADIUS_KM: f64 = 50.0;
pub const MAX_LIMIT: u32 = 100;

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn in_range(&self) -> bool {
        self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0
    }
}

/// Geospatial bounding box used as a cheap pre-filter before exact
/// distance computation.
///
/// `min_lon > max_lon` marks a box that wraps across the antimeridian;
/// `contains` and the candidate source both honor that encoding.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn wraps(&self) -> bool {
        self.min_lon > self.max_lon
    }

    #[inline]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if point.latitude < self.min_lat || point.latitude > self.max_lat {
            return false;
        }
        if self.wraps() {
            point.longitude >= self.min_lon || point.longitude <= self.max_lon
        } else {
            point.longitude >= self.min_lon && point.longitude <= self.max_lon
        }
    }
}

/// Validated listing search query, built once from the HTTP parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub page: u32,
    pub limit: u32,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub category_ids: Vec<i64>,
    pub is_halal: Option<bool>,
    pub text: Option<String>,
    pub ranking: RankingMode,
}

/// Validated business search query
#[derive(Debug, Clone)]
pub struct BusinessQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub page: u32,
    pub limit: u32,
    pub is_verified: Option<bool>,
}

/// Pickup urgency classification derived from the remaining pickup window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PickupStatus {
    Normal,
    Warning,
    Urgent,
    Expired,
}

impl PickupStatus {
    /// Severity rank used by urgency-first ranking. Lower sorts first;
    /// Expired never reaches the ranking stage.
    pub fn severity(self) -> u8 {
        match self {
            PickupStatus::Urgent => 0,
            PickupStatus::Warning => 1,
            PickupStatus::Normal => 2,
            PickupStatus::Expired => 3,
        }
    }
}

/// A listing row produced by the candidate source; read-only to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub location: GeoPoint,
    pub pickup_start: chrono::DateTime<chrono::Utc>,
    pub pickup_end: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    pub is_halal: bool,
    pub business_id: i64,
}

/// A listing enriched with the per-request derived fields; never persisted
#[derive(Debug, Clone, Serialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: ListingCandidate,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    pub remaining_pickup_hours: f64,
    pub pickup_status: PickupStatus,
}

/// A business row produced by the candidate source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCandidate {
    pub id: i64,
    pub company_name: String,
    pub is_verified: bool,
}

/// One physical location of a business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessLocation {
    pub id: i64,
    #[serde(default)]
    pub address: Option<String>,
    pub point: GeoPoint,
}

/// A business reduced to its nearest in-radius location
#[derive(Debug, Clone, Serialize)]
pub struct RankedBusiness {
    #[serde(flatten)]
    pub business: BusinessCandidate,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    pub closest_location: BusinessLocation,
}
