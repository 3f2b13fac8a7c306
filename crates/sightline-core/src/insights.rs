//! Per-question insight generation
//!
//! Each question is an independent `question -> Result<answer, error>`
//! transformation; the failure variant maps to a placeholder answer so one
//! failing question never aborts the rest. Questions are processed strictly
//! sequentially, in input order.

use tracing::{info, warn};

use crate::ai::{ChatBackend, ChatRequest, ProviderClient};
use crate::error::Result;
use crate::models::Insight;
use crate::prompts::{self, ANSWER_TEMPERATURE, MAX_ANSWER_TOKENS, SYSTEM_PROMPT};

/// Answer substituted for every question when no provider is configured
pub const UNCONFIGURED_ANSWER: &str =
    "AI service is not available. Please check the provider configuration.";

/// Generate one insight per question over the formatted data block
///
/// Returns exactly `questions.len()` insights with ids `1..=len`, input
/// order preserved. Provider failures surface as placeholder answers, never
/// as errors to the caller; an unconfigured provider short-circuits every
/// question without attempting a call.
pub async fn generate_insights(
    provider: Option<&ProviderClient>,
    data_block: &str,
    questions: &[String],
) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        let id = i + 1;
        info!(question = id, total = questions.len(), "Processing question");

        let answer = match provider {
            Some(client) => match answer_question(client, data_block, question).await {
                Ok(answer) => {
                    info!(question = id, "Question answered");
                    answer
                }
                Err(e) => {
                    warn!(question = id, error = %e, "Provider call failed, substituting placeholder");
                    format!("Unable to generate insight due to API error: {}", e)
                }
            },
            None => UNCONFIGURED_ANSWER.to_string(),
        };

        insights.push(Insight {
            id,
            question: question.clone(),
            answer,
        });
    }

    insights
}

/// Ask the provider one question, trimming the generated text
async fn answer_question(
    client: &ProviderClient,
    data_block: &str,
    question: &str,
) -> Result<String> {
    let prompt = prompts::render_user_prompt(data_block, question);
    let answer = client
        .chat(ChatRequest {
            system: SYSTEM_PROMPT,
            user: &prompt,
            max_tokens: MAX_ANSWER_TOKENS,
            temperature: ANSWER_TEMPERATURE,
        })
        .await?;
    Ok(answer.trim().to_string())
}
