use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::error::{Result, TgExtractError};
use crate::gemini::MediaKind;

/// Inbound body for `POST /telegram`. Both fields are optional at the wire
/// level so that validation can produce the contract's specific messages
/// instead of a deserializer rejection.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ExtractRequest {
    #[serde(default)]
    pub file_url: Option<String>,
    /// "image" or "audio".
    #[serde(default)]
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(rename = "extractedText")]
    pub extracted_text: String,
}

/// `POST /telegram`
///
/// Relays the referenced file to Gemini and returns the extracted text.
#[utoipa::path(
    post,
    path = "/telegram",
    tag = "extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction result", body = ExtractResponse),
        (status = 400, description = "Missing file URL or unsupported file type"),
        (status = 500, description = "Upstream or internal failure"),
    )
)]
pub async fn extract(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>> {
    // A body that does not parse as JSON carries no file URL either.
    let Ok(Json(request)) = payload else {
        return Err(TgExtractError::Validation("No file URL provided".to_string()));
    };

    let file_url = request
        .file_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| TgExtractError::Validation("No file URL provided".to_string()))?;

    let kind = request
        .file_type
        .as_deref()
        .and_then(MediaKind::from_tag)
        .ok_or_else(|| TgExtractError::Validation("Unsupported file type".to_string()))?;

    let extracted_text = state.gemini.extract(&file_url, kind).await?;

    Ok(Json(ExtractResponse {
        success: true,
        extracted_text,
    }))
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub gemini: GeminiStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct GeminiStatus {
    pub status: String,
    pub image_model: String,
    pub audio_model: String,
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gemini: GeminiStatus {
            status: "configured".to_string(),
            image_model: state.config.gemini.image_model.clone(),
            audio_model: state.config.gemini.audio_model.clone(),
        },
    })
}
