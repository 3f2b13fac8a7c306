//! Prompt templates for insight generation
//!
//! The templates are compiled-in constants; the formatted data block and the
//! question are the only variables. Generation parameters live here so the
//! backends stay prompt-agnostic.

/// System instruction framing the model as a data-analyst assistant
pub const SYSTEM_PROMPT: &str = "You are a professional data analyst AI assistant. \
     Provide clear, concise, and actionable insights based on the data provided.";

/// Maximum tokens the provider may generate per answer
pub const MAX_ANSWER_TOKENS: u32 = 300;

/// Sampling temperature for answer generation
pub const ANSWER_TEMPERATURE: f32 = 0.7;

/// Render the user prompt for one question over the formatted data block
pub fn render_user_prompt(data: &str, question: &str) -> String {
    format!(
        "You are a data analyst AI assistant. Please analyze the following data \
         and answer the specific question.\n\n\
         Data:\n{data}\n\n\
         Question: {question}\n\n\
         Please provide a concise, insightful answer (2-3 sentences) that directly \
         addresses the question based on the data provided. Focus on patterns, \
         trends, and actionable insights."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_user_prompt_embeds_data_and_question() {
        let prompt = render_user_prompt("Category 1 Values: Q1", "Which is higher?");

        assert!(prompt.contains("Data:\nCategory 1 Values: Q1"));
        assert!(prompt.contains("Question: Which is higher?"));
    }

    #[test]
    fn test_render_user_prompt_is_deterministic() {
        let a = render_user_prompt("data", "question");
        let b = render_user_prompt("data", "question");
        assert_eq!(a, b);
    }
}
