//! VIP detection handler.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use vparse_models::{classify_vip, is_absolute_http_url, DetectVipRequest, DetectVipResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Classify a video URL as VIP-gated.
///
/// Pure URL classification; no probe of the target.
pub async fn detect_vip(
    State(_state): State<AppState>,
    Json(request): Json<DetectVipRequest>,
) -> ApiResult<Json<DetectVipResponse>> {
    let url = request.url.trim();
    if !is_absolute_http_url(url) {
        return Err(ApiError::bad_request("Invalid video URL"));
    }

    let is_vip = classify_vip(url);
    debug!(is_vip, "classified URL");

    Ok(Json(DetectVipResponse {
        success: true,
        is_vip: Some(is_vip),
        message: None,
    }))
}
