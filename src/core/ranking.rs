use std::cmp::Ordering;

use crate::models::{RankedBusiness, RankedListing};

/// How filtered listing candidates are ordered.
///
/// Urgency-first exists because unsold stock near its pickup deadline
/// should outrank marginally-closer but less time-critical listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingMode {
    #[default]
    DistanceFirst,
    UrgencyFirst,
}

impl RankingMode {
    pub fn from_prioritize_urgent(prioritize_urgent: bool) -> Self {
        if prioritize_urgent {
            RankingMode::UrgencyFirst
        } else {
            RankingMode::DistanceFirst
        }
    }
}

#[inline]
fn by_distance_then_id(a: &RankedListing, b: &RankedListing) -> Ordering {
    a.distance_km
        .partial_cmp(&b.distance_km)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.listing.id.cmp(&b.listing.id))
}

/// Order listings per the selected mode.
///
/// The id tie-break makes the ordering fully deterministic, which keeps
/// pages consistent while the underlying set mutates between requests.
pub fn rank_listings(listings: &mut [RankedListing], mode: RankingMode) {
    match mode {
        RankingMode::DistanceFirst => listings.sort_by(by_distance_then_id),
        RankingMode::UrgencyFirst => listings.sort_by(|a, b| {
            a.pickup_status
                .severity()
                .cmp(&b.pickup_status.severity())
                .then_with(|| by_distance_then_id(a, b))
        }),
    }
}

/// Businesses only rank by distance to their nearest location
pub fn rank_businesses(businesses: &mut [RankedBusiness]) {
    businesses.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.business.id.cmp(&b.business.id))
    });
}
