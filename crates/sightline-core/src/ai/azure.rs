//! Azure OpenAI backend implementation
//!
//! Talks to an Azure OpenAI deployment via the data-plane REST API:
//! `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={v}`
//! with the credential in the `api-key` header.
//!
//! # Configuration
//!
//! Environment variables:
//! - `AZURE_OPENAI_ENDPOINT`: Resource URL, e.g. https://myresource.openai.azure.com (required)
//! - `AZURE_OPENAI_API_KEY`: Credential (required)
//! - `AZURE_OPENAI_API_VERSION`: API version (default: 2024-12-01-preview)
//! - `AZURE_OPENAI_DEPLOYMENT_NAME`: Deployment name (default: gpt-4o)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::{ChatBackend, ChatRequest};

/// Default API version when `AZURE_OPENAI_API_VERSION` is not set
pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";

/// Default deployment when `AZURE_OPENAI_DEPLOYMENT_NAME` is not set
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";

/// Azure OpenAI backend
///
/// The deployment name selects the model; it is part of the request URL
/// rather than the body.
#[derive(Clone)]
pub struct AzureOpenAiBackend {
    http_client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

impl AzureOpenAiBackend {
    /// Create a new Azure OpenAI backend with the default API version
    pub fn new(endpoint: &str, api_key: &str, deployment: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            deployment: deployment.to_string(),
        }
    }

    /// Override the API version string
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// Create from environment variables
    ///
    /// Required: `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY`
    /// Optional: `AZURE_OPENAI_API_VERSION`, `AZURE_OPENAI_DEPLOYMENT_NAME`
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT").ok()?;
        let api_key = std::env::var("AZURE_OPENAI_API_KEY").ok()?;
        let api_version = std::env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let deployment = std::env::var("AZURE_OPENAI_DEPLOYMENT_NAME")
            .unwrap_or_else(|_| DEFAULT_DEPLOYMENT.to_string());

        Some(Self::new(&endpoint, &api_key, &deployment).with_api_version(&api_version))
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// Chat message
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// Chat completion choice
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

/// Chat response message
#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl ChatBackend for AzureOpenAiBackend {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.to_string(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            deployment = %self.deployment,
            api_version = %self.api_version,
            prompt_len = request.user.len(),
            "Sending chat completion to Azure OpenAI"
        );

        let response = self
            .http_client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        let chat_response: ChatCompletionResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(Error::EmptyCompletion)
    }

    async fn health_check(&self) -> bool {
        // The models listing is the cheapest authenticated data-plane probe
        let url = format!(
            "{}/openai/models?api-version={}",
            self.endpoint, self.api_version
        );

        match self
            .http_client
            .get(url)
            .header("api-key", &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.deployment
    }

    fn host(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_new() {
        let backend =
            AzureOpenAiBackend::new("https://myresource.openai.azure.com", "key", "gpt-4o");
        assert_eq!(backend.model(), "gpt-4o");
        assert_eq!(backend.host(), "https://myresource.openai.azure.com");
    }

    #[test]
    fn test_backend_new_trims_trailing_slash() {
        let backend =
            AzureOpenAiBackend::new("https://myresource.openai.azure.com/", "key", "gpt-4o");
        assert_eq!(backend.host(), "https://myresource.openai.azure.com");
    }

    #[test]
    fn test_completions_url() {
        let backend =
            AzureOpenAiBackend::new("https://myresource.openai.azure.com", "key", "insights")
                .with_api_version("2024-12-01-preview");

        assert_eq!(
            backend.completions_url(),
            "https://myresource.openai.azure.com/openai/deployments/insights/chat/completions?api-version=2024-12-01-preview"
        );
    }

    #[test]
    fn test_chat_completion_request_serialization() {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a data analyst.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "Which is higher?".to_string(),
                },
            ],
            max_tokens: 300,
            temperature: 0.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Which is higher?");
        assert_eq!(json["max_tokens"], 300);
        let temp = json["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_chat_completion_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Q2 is higher."
                },
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "Q2 is higher.");
    }

    #[test]
    fn test_backend_from_env_missing() {
        std::env::remove_var("AZURE_OPENAI_ENDPOINT");
        std::env::remove_var("AZURE_OPENAI_API_KEY");

        let result = AzureOpenAiBackend::from_env();
        assert!(result.is_none());
    }
}
