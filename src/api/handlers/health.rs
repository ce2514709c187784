//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health status with a registry check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: registry reachable
/// - **503 Service Unavailable**: registry check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "registry": { "status": "ok", "message": "2 entries" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry = check_registry(&state).await;
    let healthy = registry.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registry,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the registry by counting its entries.
async fn check_registry(state: &AppState) -> CheckStatus {
    match state.shortener.entry_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} entries", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Registry error: {}", e)),
        },
    }
}
