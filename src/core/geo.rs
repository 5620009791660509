use crate::models::{BoundingBox, GeoPoint};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// 1 degree of latitude is approximately 111 km everywhere on the globe
const KM_PER_DEGREE_LAT: f64 = 111.0;

/// Above this latitude the cos(lat) longitude correction collapses and the
/// box degenerates to the full longitude range
const POLAR_LAT_DEGREES: f64 = 89.9;

/// Calculate the Haversine (great-circle) distance between two points
/// in kilometers
///
/// Pure and symmetric: `haversine_km(a, b) == haversine_km(b, a)` and
/// `haversine_km(a, a) == 0`.
#[inline]
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate an axis-aligned bounding box fully containing the radius circle
///
/// This is much cheaper than Haversine and lets the candidate source
/// pre-filter with an index-friendly range scan. The box is a superset of
/// the circle: it never excludes a true in-radius point, and exact
/// membership is always re-checked with `haversine_km`.
///
/// The longitude delta is corrected by `cos(latitude)` so the box does not
/// under-cover at high latitudes. Near the poles (|lat| > 89.9°) and
/// whenever the corrected span covers the whole globe, the longitude bound
/// degenerates to [-180, 180]. A span crossing ±180° wraps instead of
/// clamping; see `BoundingBox::wraps`.
pub fn bounding_box(center: &GeoPoint, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / KM_PER_DEGREE_LAT;
    let min_lat = (center.latitude - lat_delta).max(-90.0);
    let max_lat = (center.latitude + lat_delta).min(90.0);

    if center.latitude.abs() > POLAR_LAT_DEGREES {
        return BoundingBox {
            min_lat,
            max_lat,
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let lon_delta = radius_km / (KM_PER_DEGREE_LAT * center.latitude.to_radians().cos());
    if lon_delta >= 180.0 {
        return BoundingBox {
            min_lat,
            max_lat,
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let mut min_lon = center.longitude - lon_delta;
    let mut max_lon = center.longitude + lon_delta;
    if min_lon < -180.0 {
        min_lon += 360.0;
    }
    if max_lon > 180.0 {
        max_lon -= 360.0;
    }

    BoundingBox {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    }
}
