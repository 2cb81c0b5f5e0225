//! Landing page and 404 fallback.

use axum::{http::Uri, Json};

use crate::error::PageError;
use crate::views::HomePage;

/// Landing page.
/// GET /
pub async fn home() -> Json<HomePage> {
    Json(HomePage::new())
}

/// Unknown routes render the landing page with a 404 status.
pub async fn not_found(uri: Uri) -> PageError {
    PageError::not_found(format!("No route for {}", uri.path()))
}
