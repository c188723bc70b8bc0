//! Gateway HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use vparse_models::{
    DetectVipRequest, DetectVipResponse, ParseResult, ParseVideoRequest, ParseVideoResponse,
    ParserType,
};

use crate::error::{GatewayResult, ParseError};

/// Configuration for the gateway client.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the proxy API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PARSE_GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("PARSE_GATEWAY_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the detect/parse proxy endpoints.
pub struct GatewayClient {
    http: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ParseError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(GatewayConfig::from_env())
    }

    /// Classify a URL as VIP-gated.
    ///
    /// Fails open: any transport, status or decode failure yields `false`
    /// ("not VIP") rather than an error. This is the contract, not a
    /// convenience.
    pub async fn detect(&self, url: &str) -> bool {
        let endpoint = format!("{}/api/detect-vip", self.config.base_url);
        let request = DetectVipRequest { url: url.to_string() };

        let response = match self.http.post(&endpoint).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("VIP detection request failed: {}", e);
                return false;
            }
        };

        match response.json::<DetectVipResponse>().await {
            Ok(body) => body.is_vip.unwrap_or(false),
            Err(e) => {
                warn!("VIP detection response unreadable: {}", e);
                false
            }
        }
    }

    /// Forward a URL to the parse collaborator on the given line.
    ///
    /// No retry; a failed parse is recovered by the caller re-invoking,
    /// typically on another line.
    pub async fn parse(
        &self,
        url: &str,
        parser_type: ParserType,
        parser_line: &str,
    ) -> GatewayResult<ParseResult> {
        let endpoint = format!("{}/api/parse-video", self.config.base_url);
        let request = ParseVideoRequest {
            url: url.to_string(),
            parser_type: Some(parser_type),
            parser_line: Some(parser_line.to_string()),
        };

        debug!(line = parser_line, "sending parse request to {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(ParseError::Network)?;

        // Failure statuses still carry a {success:false, message} body
        let body: ParseVideoResponse = response.json().await.map_err(ParseError::Network)?;

        if !body.success {
            return Err(ParseError::Rejected(
                body.message.unwrap_or_else(|| "parse failed".to_string()),
            ));
        }

        body.result
            .ok_or_else(|| ParseError::InvalidResponse("success without result".to_string()))
    }
}
