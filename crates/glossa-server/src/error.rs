//! Error pages for the HTTP server.
//!
//! Errors never surface as raw messages or stack traces: a 404 renders the
//! landing page, and a 500 renders the landing page with a generic flash
//! after logging the real cause.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::error;

use crate::views::{Flash, HomePage};

/// Flash shown on every 500 page.
pub const INTERNAL_ERROR_FLASH: &str = "An internal server error occurred. Please try again.";

/// Page error type.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for PageError {}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut page = HomePage::new();
        if self.status.is_server_error() {
            error!(status = %self.status.as_u16(), "Internal server error: {}", self.message);
            page = page.with_flash(Flash::error(INTERNAL_ERROR_FLASH));
        }
        (self.status, Json(page)).into_response()
    }
}

impl From<tokio::task::JoinError> for PageError {
    fn from(err: tokio::task::JoinError) -> Self {
        PageError::internal(format!("Detection task failed: {}", err))
    }
}

/// Result type alias for page handlers.
pub type PageResult<T> = Result<T, PageError>;
