use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{
    BoundingBox, BusinessCandidate, BusinessLocation, GeoPoint, ListingCandidate,
};
use crate::services::source::{CandidateSource, SourceError};

/// Postgres-backed candidate source.
///
/// Both queries are plain range scans over indexed latitude/longitude
/// columns; a bounding box that wraps the antimeridian becomes an OR of
/// the two longitude sub-ranges.
#[derive(Debug, Clone)]
pub struct PgCandidateSource {
    pool: PgPool,
}

impl PgCandidateSource {
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }
}

fn map_sqlx(err: sqlx::Error) -> SourceError {
    match err {
        // Both mean the fetch was torn down mid-flight, not that the data
        // is bad; the engine reports these as an aborted search.
        sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => SourceError::Aborted,
        other => SourceError::Query(other.to_string()),
    }
}

fn longitude_clause(bbox: &BoundingBox) -> &'static str {
    if bbox.wraps() {
        "(longitude >= $3 OR longitude <= $4)"
    } else {
        "longitude BETWEEN $3 AND $4"
    }
}

impl CandidateSource for PgCandidateSource {
    async fn listings_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<ListingCandidate>, SourceError> {
        let query = format!(
            r#"
            SELECT l.id, l.title, l.description, l.price, l.original_price,
                   l.latitude, l.longitude, l.pickup_start, l.pickup_end,
                   l.is_halal, l.business_id,
                   COALESCE(
                       array_agg(lc.category_id) FILTER (WHERE lc.category_id IS NOT NULL),
                       '{{}}'
                   ) AS category_ids
            FROM listings l
            LEFT JOIN listing_categories lc ON lc.listing_id = l.id
            WHERE l.latitude BETWEEN $1 AND $2
              AND {}
            GROUP BY l.id
            "#,
            longitude_clause(bbox)
        );

        let rows = sqlx::query(&query)
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(bbox.min_lon)
            .bind(bbox.max_lon)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = rows
            .iter()
            .map(|row| ListingCandidate {
                id: row.get("id"),
                title: row.get("title"),
                description: row.get("description"),
                price: row.get("price"),
                original_price: row.get("original_price"),
                location: GeoPoint::new(row.get("latitude"), row.get("longitude")),
                pickup_start: row.get("pickup_start"),
                pickup_end: row.get("pickup_end"),
                category_ids: row.get("category_ids"),
                is_halal: row.get("is_halal"),
                business_id: row.get("business_id"),
            })
            .collect();

        Ok(listings)
    }

    async fn business_locations_in_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<(BusinessCandidate, BusinessLocation)>, SourceError> {
        let query = format!(
            r#"
            SELECT b.id, b.company_name, b.is_verified,
                   bl.id AS location_id, bl.address, bl.latitude, bl.longitude
            FROM businesses b
            JOIN business_locations bl ON bl.business_id = b.id
            WHERE bl.latitude BETWEEN $1 AND $2
              AND {}
            "#,
            longitude_clause(bbox)
        );

        let rows = sqlx::query(&query)
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(bbox.min_lon)
            .bind(bbox.max_lon)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let pairs = rows
            .iter()
            .map(|row| {
                let business = BusinessCandidate {
                    id: row.get("id"),
                    company_name: row.get("company_name"),
                    is_verified: row.get("is_verified"),
                };
                let location = BusinessLocation {
                    id: row.get("location_id"),
                    address: row.get("address"),
                    point: GeoPoint::new(row.get("latitude"), row.get("longitude")),
                };
                (business, location)
            })
            .collect();

        Ok(pairs)
    }
}
