//! Pluggable chat-completion backend abstraction
//!
//! # Architecture
//!
//! - `ChatBackend` trait: the single chat operation all backends implement
//! - `ProviderClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `AzureOpenAiBackend`, `OpenAiCompatibleBackend`,
//!   `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `SIGHTLINE_BACKEND`: Backend to use (azure, openai_compatible, mock).
//!   Default: azure
//! - `AZURE_OPENAI_ENDPOINT`: Azure OpenAI resource URL (required for azure)
//! - `AZURE_OPENAI_API_KEY`: Azure OpenAI credential (required for azure)
//! - `AZURE_OPENAI_API_VERSION`: API version string (default: 2024-12-01-preview)
//! - `AZURE_OPENAI_DEPLOYMENT_NAME`: Deployment name (default: gpt-4o)
//! - `OPENAI_COMPATIBLE_HOST`: Server URL (required for openai_compatible backend)
//! - `OPENAI_COMPATIBLE_MODEL`: Model name (default: gpt-3.5-turbo)
//! - `OPENAI_COMPATIBLE_API_KEY`: Bearer token if required (optional)
//!
//! When the selected backend's required variables are absent, `from_env`
//! returns `None` and the service degrades to placeholder answers instead of
//! refusing to start.

mod azure;
mod mock;
mod openai_compatible;

pub use azure::AzureOpenAiBackend;
pub use mock::MockBackend;
pub use openai_compatible::OpenAiCompatibleBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Parameters for one chat-completion exchange
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    /// System-role instruction
    pub system: &'a str,
    /// User message
    pub user: &'a str,
    /// Maximum output length in tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Trait defining the interface for all chat-completion backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Run one chat completion and return the generated text
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model or deployment name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete provider client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
/// All variants implement the same ChatBackend operations.
#[derive(Clone)]
pub enum ProviderClient {
    /// Azure OpenAI deployment (the hosted provider the visual ships against)
    Azure(AzureOpenAiBackend),
    /// Any server implementing the OpenAI `/v1/chat/completions` API
    OpenAiCompatible(OpenAiCompatibleBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl ProviderClient {
    /// Create a provider client from environment variables
    ///
    /// Checks `SIGHTLINE_BACKEND` to determine which backend to use:
    /// - `azure` (default): Uses the AZURE_OPENAI_* variables
    /// - `openai_compatible`: Uses the OPENAI_COMPATIBLE_* variables
    ///   (works with vLLM, LocalAI, llama-server, etc.)
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the selected backend's required variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("SIGHTLINE_BACKEND").unwrap_or_else(|_| "azure".to_string());

        match backend.to_lowercase().as_str() {
            "azure" => AzureOpenAiBackend::from_env().map(ProviderClient::Azure),
            "openai_compatible" | "openai" | "vllm" | "localai" | "llamacpp" => {
                OpenAiCompatibleBackend::from_env().map(ProviderClient::OpenAiCompatible)
            }
            "mock" => Some(ProviderClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown SIGHTLINE_BACKEND, falling back to azure");
                AzureOpenAiBackend::from_env().map(ProviderClient::Azure)
            }
        }
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        ProviderClient::Mock(MockBackend::new())
    }
}

// Implement ChatBackend for ProviderClient by delegating to the inner backend
#[async_trait]
impl ChatBackend for ProviderClient {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String> {
        match self {
            ProviderClient::Azure(b) => b.chat(request).await,
            ProviderClient::OpenAiCompatible(b) => b.chat(request).await,
            ProviderClient::Mock(b) => b.chat(request).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            ProviderClient::Azure(b) => b.health_check().await,
            ProviderClient::OpenAiCompatible(b) => b.health_check().await,
            ProviderClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            ProviderClient::Azure(b) => b.model(),
            ProviderClient::OpenAiCompatible(b) => b.model(),
            ProviderClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            ProviderClient::Azure(b) => b.host(),
            ProviderClient::OpenAiCompatible(b) => b.host(),
            ProviderClient::Mock(b) => b.host(),
        }
    }
}
