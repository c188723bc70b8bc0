//! Gateway client error types.

use thiserror::Error;

pub type GatewayResult<T> = Result<T, ParseError>;

/// Failures surfaced by `parse`. Detection never returns these: `detect`
/// fails open to `false` by contract.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The collaborator answered but reported failure
    #[error("parse failed: {0}")]
    Rejected(String),

    /// The collaborator answered with an unusable body
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Transport failure (unreachable, timeout, decode)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
