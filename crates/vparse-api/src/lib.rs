//! Axum proxy API server.
//!
//! This crate provides:
//! - `POST /api/detect-vip`: URL → VIP classification
//! - `POST /api/parse-video`: URL + line selection → playback descriptor,
//!   forwarded to a fixed set of upstream unlock endpoints
//! - Health endpoints, request-id/logging middleware, CORS

pub mod config;
pub mod error;
pub mod handlers;
pub mod lines;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use lines::{LineTable, ParseLine};
pub use routes::create_router;
pub use state::AppState;
