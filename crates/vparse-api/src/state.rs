//! Application state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::lines::LineTable;

/// Shared application state. The endpoints are stateless; this is only the
/// config, the outbound HTTP client and the line table.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub http: reqwest::Client,
    pub lines: Arc<LineTable>,
}

impl AppState {
    /// Create application state with the default line table.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        Self::with_lines(config, LineTable::default())
    }

    /// Create application state with an explicit line table (tests point
    /// this at a mock upstream).
    pub fn with_lines(config: ApiConfig, lines: LineTable) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            config,
            http,
            lines: Arc::new(lines),
        })
    }
}
