//! Mock backend for testing
//!
//! Returns a configurable canned answer and can be told to fail on a
//! specific call, which is how the per-question isolation tests inject a
//! provider error mid-request.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::{ChatBackend, ChatRequest};

/// Mock chat backend for testing
///
/// Healthy by default; calls are counted so `fail_on_call` can target the
/// nth chat within one test.
#[derive(Clone)]
pub struct MockBackend {
    healthy: bool,
    answer: String,
    fail_on_call: Option<u32>,
    calls: Arc<AtomicU32>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a new mock backend (healthy, fixed answer)
    pub fn new() -> Self {
        Self {
            healthy: true,
            answer: "The data shows a steady upward trend across categories.".to_string(),
            fail_on_call: None,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::new()
        }
    }

    /// Override the canned answer
    pub fn with_answer(mut self, answer: &str) -> Self {
        self.answer = answer.to_string();
        self
    }

    /// Fail the nth chat call (1-based) with a provider error
    pub fn fail_on_call(mut self, call: u32) -> Self {
        self.fail_on_call = Some(call);
        self
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, _request: ChatRequest<'_>) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(Error::Api {
                status: 500,
                body: "mock provider failure".to_string(),
            });
        }
        Ok(self.answer.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
