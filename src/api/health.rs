use axum::Json;

use super::types::HealthResponse;

/// Liveness probe. Never calls the upstream node.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn api_health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
