//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::{Itinerary, ValidationError};
use crate::resolver::{ResolveError, resolve};
use crate::validator::validate;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", post(calculate).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve the itinerary implied by a list of flights.
async fn calculate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    // Take the rejection and parse JSON manually so that oversized or
    // undecodable bodies still get our error format
    let body = body.map_err(|rejection| AppError::UnreadableBody {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let req: CalculateRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body_len = body.len(), "invalid JSON body");
        AppError::InvalidJson
    })?;

    let itinerary = calculate_itinerary(&req, &state.config)?;
    info!(%itinerary, segments = req.len(), "calculated flight path");

    Ok(Json(CalculateResponse::success(&itinerary)))
}

/// Any method other than POST on `/calculate`.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Validate and resolve a decoded request.
///
/// Rejects requests with more than `config.max_segments` flights before
/// doing any work on them.
pub fn calculate_itinerary(
    req: &CalculateRequest,
    config: &ServerConfig,
) -> Result<Itinerary, AppError> {
    if req.len() > config.max_segments {
        return Err(AppError::TooManySegments {
            count: req.len(),
            limit: config.max_segments,
        });
    }

    let segments = validate(req.iter().map(RawSegment::pair))?;
    Ok(resolve(&segments)?)
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body could not be read, e.g. it exceeds the body size limit
    #[error("Invalid request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },

    /// Body was not a JSON list of string pairs
    #[error("Invalid JSON")]
    InvalidJson,

    /// Request exceeds the configured size limit
    #[error("Invalid request format: {count} segments exceeds the limit of {limit}")]
    TooManySegments { count: usize, limit: usize },

    /// Input pairs failed validation
    #[error("Invalid request format: {0}")]
    Validation(#[from] ValidationError),

    /// Segments do not form a single itinerary
    #[error("Failed to find flight path: {0}")]
    Resolution(#[from] ResolveError),

    /// Wrong HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson
            | AppError::TooManySegments { .. }
            | AppError::Validation(_)
            | AppError::Resolution(_) => StatusCode::BAD_REQUEST,
            AppError::UnreadableBody { status, .. } => *status,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Position of the offending flight in the request, for validation errors.
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            AppError::Validation(e) => e.index(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match self.segment_index() {
            Some(index) => warn!(%status, %message, index, "request rejected"),
            None => warn!(%status, %message, "request rejected"),
        }

        (status, Json(CalculateResponse::error(message))).into_response()
    }
}
