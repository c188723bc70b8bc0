//! Wire schemas for the detect/parse endpoints.
//!
//! Shared by the axum handlers and the gateway client so both sides of the
//! contract deserialize the same shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::parse::{ParseResult, ParserType};

/// Request body for `POST /api/detect-vip`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectVipRequest {
    /// Video page URL to classify. Defaulted so a missing field is reported
    /// as a 400 rather than a deserialization rejection.
    #[serde(default)]
    pub url: String,
}

/// Response body for `POST /api/detect-vip`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectVipResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for `POST /api/parse-video`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseVideoRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_type: Option<ParserType>,
    /// Upstream line id; unknown values fall back to the default line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_line: Option<String>,
}

/// Response body for `POST /api/parse-video`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseVideoResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ParseResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
