//! Sightline Web Server
//!
//! Axum-based REST API relaying chart data and questions to a hosted
//! language-model provider.
//!
//! - Permissive CORS (the Power BI visual posts from arbitrary origins)
//! - Request tracing with a per-instance diagnostic request counter
//! - Provider degradation: missing credentials never prevent startup

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use sightline_core::ai::{ChatBackend, ProviderClient};

mod handlers;

/// Shared application state
pub struct AppState {
    /// Provider client, constructed once at startup and shared read-only.
    /// None when credentials are absent; answers then degrade to placeholders.
    pub provider: Option<ProviderClient>,
    /// Monotonic request counter for diagnostic labeling. Advisory only:
    /// not exposed in responses, not persisted across restarts.
    pub requests: AtomicU64,
}

/// Create the application router
///
/// Takes the provider explicitly so tests can inject a mock backend.
pub fn create_router(provider: Option<ProviderClient>) -> Router {
    if let Some(ref client) = provider {
        info!(
            "Provider configured: {} (deployment: {})",
            client.host(),
            client.model()
        );
    } else {
        warn!("⚠️  Provider not configured; insight answers will be placeholders");
    }

    let state = Arc::new(AppState {
        provider,
        requests: AtomicU64::new(0),
    });

    Router::new()
        .route("/", get(handlers::get_root))
        .route("/health", get(handlers::health_check))
        // Both routes are aliases for the same handler; the visual shipped
        // against /generate-insights before /api/insights existed
        .route("/api/insights", post(handlers::generate_insights))
        .route("/generate-insights", post(handlers::generate_insights))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the server, reading provider configuration from the environment
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let provider = ProviderClient::from_env();
    check_provider_connection(provider.as_ref()).await;

    let app = create_router(provider);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log provider connection status
async fn check_provider_connection(provider: Option<&ProviderClient>) {
    match provider {
        Some(client) => {
            if client.health_check().await {
                info!(
                    "✅ Provider connected: {} (deployment: {})",
                    client.host(),
                    client.model()
                );
            } else {
                warn!(
                    "⚠️  Provider configured but not responding: {} (deployment: {})",
                    client.host(),
                    client.model()
                );
            }
        }
        None => {
            info!("ℹ️  Provider not configured (set AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_API_KEY)");
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    /// Request body failed schema validation; carries the deserializer's
    /// field-level detail and the rejection's own status code
    pub fn invalid_body(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Error generating insights: {}", err),
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
