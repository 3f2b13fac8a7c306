//! Service metadata and liveness handlers

use axum::Json;
use serde::Serialize;

/// Response for the liveness probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / - Service metadata and endpoint listing
pub async fn get_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Sightline Insight API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
        "endpoints": {
            "health": "/health",
            "generate_insights": "/generate-insights",
            "insights": "/api/insights"
        }
    }))
}

/// GET /health - Liveness probe
///
/// Always 200, independent of provider configuration.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Sightline Insight API is running",
    })
}
