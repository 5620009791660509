use thiserror::Error;

use crate::services::SourceError;

/// Everything the search engine can fail with.
///
/// Validation errors are raised before any candidate-source I/O; upstream
/// failures are surfaced, never degraded into empty results.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid query parameter: {0}")]
    InvalidQueryParameter(String),

    #[error("candidate source unavailable: {0}")]
    UpstreamUnavailable(#[source] SourceError),

    #[error("search aborted before completion")]
    EngineAborted,
}

impl From<SourceError> for SearchError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Aborted => SearchError::EngineAborted,
            other => SearchError::UpstreamUnavailable(other),
        }
    }
}
