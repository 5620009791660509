mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::SearchEngine;
use routes::search::AppState;
use services::{PgCandidateSource, SystemClock};
use tracing::{error, info};

/// JSON error response for payload/query deserialization errors
#[derive(Debug, serde::Serialize)]
pub struct RequestError {
    pub status: String,
    pub message: String,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RequestError {}

impl error::ResponseError for RequestError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::BAD_REQUEST)
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_default())
    }
}

/// Handle malformed query strings (bad floats, unknown enum values)
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("query payload error on {}: {}", req.path(), err);
    RequestError {
        status: "error".to_string(),
        message: format!("Invalid query: {}", err),
    }
    .into()
}

/// Handle malformed JSON bodies
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    RequestError {
        status: "error".to_string(),
        message: format!("Invalid JSON: {}", err),
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Savr search service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the candidate source
    let max_conn = settings.database.max_connections.unwrap_or(10);
    let min_conn = settings.database.min_connections.unwrap_or(1);

    let source = PgCandidateSource::connect(&settings.database.url, max_conn, min_conn)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        });

    info!("Candidate source initialized (max: {} connections)", max_conn);

    // Initialize the engine with configured urgency thresholds
    let thresholds = settings.pickup.thresholds();
    let engine = SearchEngine::new(source.clone(), SystemClock, thresholds);

    info!(
        "Search engine initialized (urgent <= {}h, warning <= {}h)",
        thresholds.urgent_hours, thresholds.warning_hours
    );

    // Build application state
    let app_state = AppState {
        engine,
        source,
        search: settings.search.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
