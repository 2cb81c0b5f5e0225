//! Route definitions for the HTTP server.

mod dashboard;
mod health;
mod home;
mod predict;
mod visualization;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health::health_check))
        // Aggregate statistics
        .route("/dashboard", get(dashboard::dashboard))
        // Charts
        .route(
            "/visualization",
            get(visualization::visualization_page).post(visualization::visualization),
        )
        // Detection
        .route("/predict", get(predict::predict).post(predict::predict))
        .route(
            "/predict_existing",
            get(predict::predict_existing_page).post(predict::predict_existing),
        )
        .route(
            "/predict_proposed",
            get(predict::predict_proposed_page).post(predict::predict_proposed),
        )
        .fallback(home::not_found)
        // Attach state
        .with_state(state)
}

pub use dashboard::*;
pub use health::*;
pub use home::*;
pub use predict::*;
pub use visualization::*;
