//! glossa-server - HTTP server for glossa.
//!
//! Serves the language detection comparison pages as JSON view models:
//! a landing page, the legacy and proposed prediction pages, the dashboard
//! and the length-vs-confidence visualization.
//!
//! # Example
//!
//! ```ignore
//! use glossa_core::GlossaConfig;
//! use glossa_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::from_config(GlossaConfig::default()).unwrap();
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{PageError, PageResult};
pub use factory::create_service;
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
