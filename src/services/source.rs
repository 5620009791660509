use thiserror::Error;

use crate::models::{BoundingBox, BusinessCandidate, BusinessLocation, ListingCandidate};

/// Errors a candidate source can surface to the engine
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("candidate query failed: {0}")]
    Query(String),

    #[error("candidate fetch aborted")]
    Aborted,
}

/// The data collaborator behind the search engine.
///
/// Implementations answer index-friendly range scans over a bounding box.
/// They must return every row inside the box and may return extras; the
/// engine always re-checks exact radius membership.
#[allow(async_fn_in_trait)]
pub trait CandidateSource {
    async fn listings_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<ListingCandidate>, SourceError>;

    /// One row per business location; the engine reduces per business
    async fn business_locations_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<(BusinessCandidate, BusinessLocation)>, SourceError>;
}

/// Vec-backed candidate source.
///
/// Used by the test suite and benches; also a reference implementation of
/// the box-scan contract for any concrete store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    listings: Vec<ListingCandidate>,
    businesses: Vec<(BusinessCandidate, Vec<BusinessLocation>)>,
}

impl InMemorySource {
    pub fn new(
        listings: Vec<ListingCandidate>,
        businesses: Vec<(BusinessCandidate, Vec<BusinessLocation>)>,
    ) -> Self {
        Self {
            listings,
            businesses,
        }
    }

    pub fn with_listings(listings: Vec<ListingCandidate>) -> Self {
        Self {
            listings,
            businesses: Vec::new(),
        }
    }

    pub fn with_businesses(
        businesses: Vec<(BusinessCandidate, Vec<BusinessLocation>)>,
    ) -> Self {
        Self {
            listings: Vec::new(),
            businesses,
        }
    }
}

impl CandidateSource for InMemorySource {
    async fn listings_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<ListingCandidate>, SourceError> {
        Ok(self
            .listings
            .iter()
            .filter(|l| bbox.contains(&l.location))
            .cloned()
            .collect())
    }

    async fn business_locations_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<(BusinessCandidate, BusinessLocation)>, SourceError> {
        let mut rows = Vec::new();
        for (business, locations) in &self.businesses {
            for location in locations {
                if bbox.contains(&location.point) {
                    rows.push((business.clone(), location.clone()));
                }
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::bounding_box;
    use crate::models::GeoPoint;
    use chrono::{Duration, Utc};

    fn listing_at(id: i64, lat: f64, lon: f64) -> ListingCandidate {
        ListingCandidate {
            id,
            title: format!("Listing {}", id),
            description: None,
            price: 10.0,
            original_price: None,
            location: GeoPoint::new(lat, lon),
            pickup_start: Utc::now(),
            pickup_end: Utc::now() + Duration::hours(4),
            category_ids: vec![],
            is_halal: false,
            business_id: 1,
        }
    }

    #[tokio::test]
    async fn test_in_memory_box_scan() {
        let source = InMemorySource::with_listings(vec![
            listing_at(1, 41.31, 69.24),
            listing_at(2, 41.32, 69.25),
            listing_at(3, 45.00, 69.24),
        ]);

        let bbox = bounding_box(&GeoPoint::new(41.3092, 69.2401), 10.0);
        let rows = source.listings_in_box(&bbox).await.unwrap();

        let ids: Vec<i64> = rows.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
