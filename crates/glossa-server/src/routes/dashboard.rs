//! Dashboard endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use glossa_core::stats::DetectionStats;
use glossa_core::types::DetectionSource;

use crate::state::AppState;
use crate::views::Flash;

/// Dashboard with separate statistics for legacy and proposed detections.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub page: &'static str,
    pub flashes: Vec<Flash>,
    pub stats_existing: DetectionStats,
    pub stats_proposed: DetectionStats,
}

/// Recompute statistics over the whole log.
/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardPage> {
    let service = state.service();

    Json(DashboardPage {
        page: "dashboard",
        flashes: Vec::new(),
        stats_existing: service.stats(DetectionSource::Legacy),
        stats_proposed: service.stats(DetectionSource::Proposed),
    })
}
