use std::collections::HashMap;

use crate::core::error::SearchError;
use crate::core::filters::ListingFilters;
use crate::core::geo::{bounding_box, haversine_km};
use crate::core::paginate::{paginate, Page};
use crate::core::pickup::{classify, remaining_hours, UrgencyThresholds};
use crate::core::ranking::{rank_businesses, rank_listings};
use crate::models::{
    BusinessQuery, GeoPoint, PickupStatus, RankedBusiness, RankedListing, SearchQuery,
    MAX_LIMIT, MAX_RADIUS_KM,
};
use crate::services::{CandidateSource, Clock};

/// The search orchestrator.
///
/// Stateless per request: validate, fetch candidates inside the bounding
/// box, cut to the exact radius, derive urgency, filter, rank, paginate.
/// The source fetch is the only await point.
#[derive(Debug, Clone)]
pub struct SearchEngine<S, C> {
    source: S,
    clock: C,
    thresholds: UrgencyThresholds,
}

impl<S: CandidateSource, C: Clock> SearchEngine<S, C> {
    pub fn new(source: S, clock: C, thresholds: UrgencyThresholds) -> Self {
        Self {
            source,
            clock,
            thresholds,
        }
    }

    /// Listing search: the full pipeline, expired listings never surface
    pub async fn search_listings(
        &self,
        query: &SearchQuery,
    ) -> Result<Page<RankedListing>, SearchError> {
        validate_center(&query.center)?;
        validate_radius(query.radius_km)?;
        validate_paging(query.page, query.limit)?;
        validate_prices(query.price_min, query.price_max)?;
        validate_categories(&query.category_ids)?;

        let bbox = bounding_box(&query.center, query.radius_km);
        let candidates = self.source.listings_in_box(&bbox).await?;
        tracing::debug!(
            candidates = candidates.len(),
            radius_km = query.radius_km,
            "fetched listing candidates"
        );

        let now = self.clock.now();
        let filters = ListingFilters::from_query(query);

        let mut matched: Vec<RankedListing> = candidates
            .into_iter()
            .filter_map(|listing| {
                let distance_km = haversine_km(&query.center, &listing.location);
                if distance_km > query.radius_km {
                    return None;
                }

                let remaining = remaining_hours(now, listing.pickup_end);
                let status = classify(remaining, &self.thresholds);
                if status == PickupStatus::Expired {
                    return None;
                }

                if !filters.matches(&listing) {
                    return None;
                }

                Some(RankedListing {
                    listing,
                    distance_km,
                    remaining_pickup_hours: remaining,
                    pickup_status: status,
                })
            })
            .collect();

        rank_listings(&mut matched, query.ranking);

        Ok(paginate(matched, query.page, query.limit))
    }

    /// Business search: each business collapses to its nearest in-radius
    /// location; a business with none is excluded entirely
    pub async fn search_businesses(
        &self,
        query: &BusinessQuery,
    ) -> Result<Page<RankedBusiness>, SearchError> {
        validate_center(&query.center)?;
        validate_radius(query.radius_km)?;
        validate_paging(query.page, query.limit)?;

        let bbox = bounding_box(&query.center, query.radius_km);
        let rows = self.source.business_locations_in_box(&bbox).await?;
        tracing::debug!(rows = rows.len(), "fetched business location rows");

        let mut nearest: HashMap<i64, RankedBusiness> = HashMap::new();
        for (business, location) in rows {
            if let Some(verified) = query.is_verified {
                if business.is_verified != verified {
                    continue;
                }
            }

            let distance_km = haversine_km(&query.center, &location.point);
            if distance_km > query.radius_km {
                continue;
            }

            match nearest.entry(business.id) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    if distance_km < entry.get().distance_km {
                        *entry.get_mut() = RankedBusiness {
                            business,
                            distance_km,
                            closest_location: location,
                        };
                    }
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(RankedBusiness {
                        business,
                        distance_km,
                        closest_location: location,
                    });
                }
            }
        }

        let mut matched: Vec<RankedBusiness> = nearest.into_values().collect();
        rank_businesses(&mut matched);

        Ok(paginate(matched, query.page, query.limit))
    }
}

fn validate_center(center: &GeoPoint) -> Result<(), SearchError> {
    if center.in_range() {
        Ok(())
    } else {
        Err(SearchError::InvalidCoordinate {
            latitude: center.latitude,
            longitude: center.longitude,
        })
    }
}

fn validate_radius(radius_km: f64) -> Result<(), SearchError> {
    if radius_km > 0.0 && radius_km <= MAX_RADIUS_KM {
        Ok(())
    } else {
        Err(SearchError::InvalidQueryParameter(format!(
            "radius must be in (0, {}] km, got {}",
            MAX_RADIUS_KM, radius_km
        )))
    }
}

fn validate_paging(page: u32, limit: u32) -> Result<(), SearchError> {
    if page < 1 {
        return Err(SearchError::InvalidQueryParameter(
            "page must be >= 1".to_string(),
        ));
    }
    if limit < 1 || limit > MAX_LIMIT {
        return Err(SearchError::InvalidQueryParameter(format!(
            "limit must be in [1, {}], got {}",
            MAX_LIMIT, limit
        )));
    }
    Ok(())
}

fn validate_prices(price_min: Option<f64>, price_max: Option<f64>) -> Result<(), SearchError> {
    if let Some(min) = price_min {
        if min < 0.0 {
            return Err(SearchError::InvalidQueryParameter(
                "minPrice must not be negative".to_string(),
            ));
        }
    }
    if let Some(max) = price_max {
        if max < 0.0 {
            return Err(SearchError::InvalidQueryParameter(
                "maxPrice must not be negative".to_string(),
            ));
        }
    }
    if let (Some(min), Some(max)) = (price_min, price_max) {
        if min > max {
            return Err(SearchError::InvalidQueryParameter(format!(
                "minPrice {} exceeds maxPrice {}",
                min, max
            )));
        }
    }
    Ok(())
}

fn validate_categories(category_ids: &[i64]) -> Result<(), SearchError> {
    if let Some(bad) = category_ids.iter().find(|id| **id <= 0) {
        return Err(SearchError::InvalidQueryParameter(format!(
            "malformed category id: {}",
            bad
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranking::RankingMode;
    use crate::models::{BusinessCandidate, BusinessLocation, ListingCandidate};
    use crate::services::{FixedClock, InMemorySource};
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn listing(id: i64, lat: f64, lon: f64, hours_left: i64) -> ListingCandidate {
        ListingCandidate {
            id,
            title: format!("Listing {}", id),
            description: None,
            price: 10.0,
            original_price: Some(25.0),
            location: GeoPoint::new(lat, lon),
            pickup_start: fixed_now() - Duration::hours(2),
            pickup_end: fixed_now() + Duration::hours(hours_left),
            category_ids: vec![1],
            is_halal: false,
            business_id: 1,
        }
    }

    fn engine(
        listings: Vec<ListingCandidate>,
    ) -> SearchEngine<InMemorySource, FixedClock> {
        SearchEngine::new(
            InMemorySource::with_listings(listings),
            FixedClock(fixed_now()),
            UrgencyThresholds::default(),
        )
    }

    fn base_query() -> SearchQuery {
        SearchQuery {
            center: GeoPoint::new(41.3092, 69.2401),
            radius_km: 5.0,
            page: 1,
            limit: 10,
            price_min: None,
            price_max: None,
            category_ids: vec![],
            is_halal: None,
            text: None,
            ranking: RankingMode::DistanceFirst,
        }
    }

    #[tokio::test]
    async fn test_expired_listing_never_surfaces() {
        let mut expired = listing(1, 41.31, 69.24, 4);
        expired.pickup_end = fixed_now() - Duration::hours(1);
        let engine = engine(vec![expired, listing(2, 41.31, 69.24, 4)]);

        let page = engine.search_listings(&base_query()).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].listing.id, 2);
    }

    #[tokio::test]
    async fn test_validation_precedes_fetch() {
        let engine = engine(vec![listing(1, 41.31, 69.24, 4)]);
        let mut query = base_query();
        query.radius_km = 80.0;

        let err = engine.search_listings(&query).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidQueryParameter(_)));

        query = base_query();
        query.center = GeoPoint::new(95.0, 69.24);
        let err = engine.search_listings(&query).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidCoordinate { .. }));
    }

    #[tokio::test]
    async fn test_business_reduces_to_nearest_location() {
        let business = BusinessCandidate {
            id: 1,
            company_name: "Navruz Bakery".to_string(),
            is_verified: true,
        };
        let near = BusinessLocation {
            id: 10,
            address: None,
            // ~2 km north of the center
            point: GeoPoint::new(41.3272, 69.2401),
        };
        let far = BusinessLocation {
            id: 11,
            address: None,
            // ~40 km away
            point: GeoPoint::new(41.67, 69.24),
        };

        let engine = SearchEngine::new(
            InMemorySource::with_businesses(vec![(business, vec![far, near])]),
            FixedClock(fixed_now()),
            UrgencyThresholds::default(),
        );

        let query = BusinessQuery {
            center: GeoPoint::new(41.3092, 69.2401),
            radius_km: 5.0,
            page: 1,
            limit: 10,
            is_verified: None,
        };
        let page = engine.search_businesses(&query).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].closest_location.id, 10);
        assert!(page.items[0].distance_km < 3.0);
    }
}
