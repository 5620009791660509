use serde::Serialize;

use crate::core::paginate::Page;
use crate::models::{RankedBusiness, RankedListing};

/// Pagination block shared by both search responses
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Envelope for GET /listings
#[derive(Debug, Clone, Serialize)]
pub struct ListingSearchResponse {
    pub status: String,
    pub data: ListingData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingData {
    pub listings: Vec<RankedListing>,
    pub pagination: PaginationMeta,
}

impl From<Page<RankedListing>> for ListingSearchResponse {
    fn from(page: Page<RankedListing>) -> Self {
        let pagination = PaginationMeta::from(&page);
        Self {
            status: "success".to_string(),
            data: ListingData {
                listings: page.items,
                pagination,
            },
        }
    }
}

/// Envelope for GET /businesses
#[derive(Debug, Clone, Serialize)]
pub struct BusinessSearchResponse {
    pub status: String,
    pub data: BusinessData,
}

#[derive(Debug, Clone, Serialize)]
pub struct BusinessData {
    pub businesses: Vec<RankedBusiness>,
    pub pagination: PaginationMeta,
}

impl From<Page<RankedBusiness>> for BusinessSearchResponse {
    fn from(page: Page<RankedBusiness>) -> Self {
        let pagination = PaginationMeta::from(&page);
        Self {
            status: "success".to_string(),
            data: BusinessData {
                businesses: page.items,
                pagination,
            },
        }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
