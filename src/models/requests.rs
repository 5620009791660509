use serde::Deserialize;
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::error::SearchError;
use crate::core::ranking::RankingMode;
use crate::models::{BusinessQuery, GeoPoint, SearchQuery};

/// Query-string parameters of GET /listings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListingSearchParams {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub radius: Option<f64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
    /// Comma-separated category ids
    pub categories: Option<String>,
    #[serde(rename = "isHalal")]
    pub is_halal: Option<bool>,
    pub search: Option<String>,
    #[serde(rename = "prioritizeUrgent", default)]
    pub prioritize_urgent: bool,
}

impl ListingSearchParams {
    /// Apply defaults and parse into the engine's query type.
    ///
    /// Bound checks beyond parsing live in the engine, which validates
    /// before any candidate-source call.
    pub fn into_query(self, settings: &SearchSettings) -> Result<SearchQuery, SearchError> {
        let category_ids = match self.categories.as_deref() {
            Some(raw) => parse_category_ids(raw)?,
            None => Vec::new(),
        };

        Ok(SearchQuery {
            center: GeoPoint::new(self.latitude, self.longitude),
            radius_km: self.radius.unwrap_or(settings.default_radius_km),
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(settings.default_limit),
            price_min: self.min_price,
            price_max: self.max_price,
            category_ids,
            is_halal: self.is_halal,
            text: self.search.filter(|s| !s.trim().is_empty()),
            ranking: RankingMode::from_prioritize_urgent(self.prioritize_urgent),
        })
    }
}

/// Query-string parameters of GET /businesses
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BusinessSearchParams {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub radius: Option<f64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "isVerified")]
    pub is_verified: Option<bool>,
}

impl BusinessSearchParams {
    pub fn into_query(self, settings: &SearchSettings) -> BusinessQuery {
        BusinessQuery {
            center: GeoPoint::new(self.latitude, self.longitude),
            radius_km: self.radius.unwrap_or(settings.default_radius_km),
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(settings.default_limit),
            is_verified: self.is_verified,
        }
    }
}

fn parse_category_ids(raw: &str) -> Result<Vec<i64>, SearchError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                SearchError::InvalidQueryParameter(format!("malformed category id: {:?}", token))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ListingSearchParams {
        ListingSearchParams {
            latitude: 41.3092,
            longitude: 69.2401,
            radius: None,
            page: None,
            limit: None,
            min_price: None,
            max_price: None,
            categories: None,
            is_halal: None,
            search: None,
            prioritize_urgent: false,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let query = params().into_query(&SearchSettings::default()).unwrap();

        assert_eq!(query.radius_km, 5.0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.ranking, RankingMode::DistanceFirst);
        assert!(query.category_ids.is_empty());
    }

    #[test]
    fn test_categories_parsed() {
        let mut p = params();
        p.categories = Some("3, 7,12".to_string());

        let query = p.into_query(&SearchSettings::default()).unwrap();
        assert_eq!(query.category_ids, vec![3, 7, 12]);
    }

    #[test]
    fn test_malformed_category_rejected() {
        let mut p = params();
        p.categories = Some("3,abc".to_string());

        let err = p.into_query(&SearchSettings::default()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQueryParameter(_)));
    }

    #[test]
    fn test_prioritize_urgent_selects_mode() {
        let mut p = params();
        p.prioritize_urgent = true;

        let query = p.into_query(&SearchSettings::default()).unwrap();
        assert_eq!(query.ranking, RankingMode::UrgencyFirst);
    }

    #[test]
    fn test_blank_search_text_dropped() {
        let mut p = params();
        p.search = Some("   ".to_string());

        let query = p.into_query(&SearchSettings::default()).unwrap();
        assert!(query.text.is_none());
    }
}
