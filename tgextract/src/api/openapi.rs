use axum::Json;
use utoipa::OpenApi;

use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "tgextract API",
        description = "HTTP relay extracting text from image and audio files via Gemini"
    ),
    paths(handlers::extract, handlers::health_check),
    components(schemas(
        handlers::ExtractRequest,
        handlers::ExtractResponse,
        handlers::HealthData,
        handlers::GeminiStatus,
    )),
    tags(
        (name = "extract", description = "Text extraction relay"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
