//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::PageResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub detections: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<usize>,
}

/// Health check endpoint.
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> PageResult<Json<HealthResponse>> {
    let service = state.service();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        detections: service.log().len(),
        max_records: state.config().log.max_records.filter(|max| *max > 0),
    }))
}
