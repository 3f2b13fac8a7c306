//! Sightline Core Library
//!
//! Shared functionality for the Sightline insight relay:
//! - Request/response data model for the insight API
//! - Chart data formatter for prompt assembly
//! - Pluggable chat-completion backends (Azure OpenAI, OpenAI-compatible)
//! - Per-question insight generation with failure isolation

pub mod ai;
pub mod error;
pub mod format;
pub mod insights;
pub mod models;
pub mod prompts;

pub use ai::{
    AzureOpenAiBackend, ChatBackend, ChatRequest, MockBackend, OpenAiCompatibleBackend,
    ProviderClient,
};
pub use error::{Error, Result};
pub use format::format_chart_data;
pub use insights::{generate_insights, UNCONFIGURED_ANSWER};
pub use models::{ChartData, DataPoint, Insight, InsightRequest, InsightResponse};
