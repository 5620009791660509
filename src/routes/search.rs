use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::{SearchEngine, SearchError};
use crate::models::{
    BusinessSearchParams, BusinessSearchResponse, ErrorResponse, HealthResponse,
    ListingSearchParams, ListingSearchResponse,
};
use crate::services::{PgCandidateSource, SystemClock};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: SearchEngine<PgCandidateSource, SystemClock>,
    pub source: PgCandidateSource,
    pub search: SearchSettings,
}

/// Configure all search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(search_listings))
        .route("/businesses", web::get().to(search_businesses));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.source.health_check().await;
    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Listing search endpoint
///
/// GET /api/v1/listings?latitude&longitude&radius&page&limit&minPrice
///     &maxPrice&categories&isHalal&search&prioritizeUrgent
async fn search_listings(
    state: web::Data<AppState>,
    params: web::Query<ListingSearchParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("listing search rejected: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    let query = match params.into_inner().into_query(&state.search) {
        Ok(query) => query,
        Err(err) => return error_response(&err),
    };

    tracing::info!(
        latitude = query.center.latitude,
        longitude = query.center.longitude,
        radius_km = query.radius_km,
        page = query.page,
        "listing search"
    );

    match state.engine.search_listings(&query).await {
        Ok(page) => {
            tracing::debug!(returned = page.items.len(), total = page.total, "listings found");
            HttpResponse::Ok().json(ListingSearchResponse::from(page))
        }
        Err(err) => error_response(&err),
    }
}

/// Business search endpoint
///
/// GET /api/v1/businesses?latitude&longitude&radius&isVerified&page&limit
async fn search_businesses(
    state: web::Data<AppState>,
    params: web::Query<BusinessSearchParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("business search rejected: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    let query = params.into_inner().into_query(&state.search);

    tracing::info!(
        latitude = query.center.latitude,
        longitude = query.center.longitude,
        radius_km = query.radius_km,
        "business search"
    );

    match state.engine.search_businesses(&query).await {
        Ok(page) => HttpResponse::Ok().json(BusinessSearchResponse::from(page)),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &SearchError) -> HttpResponse {
    let status = match err {
        SearchError::InvalidCoordinate { .. } | SearchError::InvalidQueryParameter(_) => {
            StatusCode::BAD_REQUEST
        }
        SearchError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        SearchError::EngineAborted => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("search failed: {}", err);
    }

    HttpResponse::build(status).json(ErrorResponse::new(err.to_string()))
}
