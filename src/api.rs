// 🌐 REST API - Axum router and handlers
//
// POST /receipts/process      → {"id": "..."}
// GET  /receipts/:id/points   → {"points": N}
// GET  /health                → {"status": "ok", "receipts": N, "last_processed_at": ...}

use crate::error::ReceiptError;
use crate::processor::ReceiptProcessor;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub processor: ReceiptProcessor,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        AppState { processor }
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
    pub last_processed_at: Option<DateTime<Utc>>,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReceiptError::MalformedInput(_) | ReceiptError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ReceiptError::NotFound(_) => StatusCode::NOT_FOUND,
            ReceiptError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, self.to_string()).into_response()
    }
}

// ============================================================================
// API HANDLERS
// ============================================================================

/// POST /receipts/process - Validate, score, and store a receipt
///
/// The body is decoded here rather than through `Json` so that any decode
/// failure, whatever the content type, maps to the same 400 response.
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    match state.processor.process_json(&body) {
        Ok(id) => {
            info!(%id, "Receipt processed");
            Ok(Json(ProcessResponse { id }))
        }
        Err(e) => {
            warn!(error = %e, "Rejected receipt");
            Err(e)
        }
    }
}

/// GET /receipts/:id/points - Points for a processed receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let points = state.processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.processor.store().len(),
        last_processed_at: state.processor.store().last_processed_at(),
    })
}

async fn method_not_allowed() -> ReceiptError {
    ReceiptError::MethodNotAllowed
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/receipts/process",
            post(process_receipt).fallback(method_not_allowed),
        )
        .route(
            "/receipts/:id/points",
            // HEAD would otherwise be served by the GET handler
            get(get_points)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
