//! HTTP handlers
//!
//! Thin by design: parameter extraction and delegation to `ResolverService`,
//! no business logic.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use super::AppState;
use crate::errors::AppError;
use crate::models::{ResolveRequest, Response};

/// `POST /api/v1/resolve`
///
/// Response order follows worklist completion order, not input order —
/// callers must join results back to their inputs by `input_uuid`.
pub async fn resolve(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<Vec<Response>>, StatusCode> {
    if payload.names.is_empty() {
        return Ok(Json(Vec::new()));
    }

    info!(count = payload.names.len(), advanced = payload.advanced, "resolving names");

    let responses = state
        .resolver_service
        .resolve(payload.names, payload.data_source_ids, payload.advanced)
        .await
        .map_err(|err| {
            error!(error = %err, "resolve failed");
            match err {
                AppError::Fuzzy(_) => StatusCode::SERVICE_UNAVAILABLE,
                AppError::Configuration { .. } | AppError::Internal { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        })?;

    Ok(Json(responses))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ready", "index_terms": state.resolver_service.index_len() }))
}

pub async fn liveness_check() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
