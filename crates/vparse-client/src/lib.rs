//! Client for the detect/parse gateway endpoints.
//!
//! This crate provides:
//! - `GatewayClient`: typed HTTP client for `detect-vip` and `parse-video`
//! - `ParseSession`: the UI-facing parse flow state machine

pub mod client;
pub mod error;
pub mod session;

pub use client::{GatewayClient, GatewayConfig};
pub use error::{GatewayResult, ParseError};
pub use session::{ParseInFlight, ParsePhase, ParseSession};
