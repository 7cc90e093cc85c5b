//! Question answering over an analyzed document.

use super::client::ApiClient;
use crate::types::{
    ClientError, QuestionRequest, QuestionResponse, Result, SuggestedQuestionsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info};

pub const MIN_QUESTION_CHARS: usize = 3;
pub const MAX_QUESTION_CHARS: usize = 500;

const FOLLOW_UP_POOL: [&str; 8] = [
    "Can you explain this in simpler terms?",
    "What are the specific consequences?",
    "Are there any exceptions to this rule?",
    "How does this compare to standard practices?",
    "What should I do to protect myself?",
    "When does this take effect?",
    "Who is responsible for enforcement?",
    "What are my options if I disagree?",
];

/// Backend operations used by the chat assistant.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ChatApi: Send + Sync {
    async fn ask_question(&self, document_id: &str, question: &str) -> Result<QuestionResponse>;

    async fn get_suggested_questions(&self, document_id: &str) -> Result<Vec<String>>;
}

/// Rejects questions that are empty, shorter than three characters or longer
/// than 500 (after trimming, counted in characters).
pub fn validate_question(question: &str) -> Result<()> {
    let trimmed = question.trim();
    let chars = trimmed.chars().count();

    if chars == 0 {
        return Err(ClientError::Validation("Please enter a question".to_string()));
    }
    if chars < MIN_QUESTION_CHARS {
        return Err(ClientError::Validation("Question is too short".to_string()));
    }
    if chars > MAX_QUESTION_CHARS {
        return Err(ClientError::Validation(format!(
            "Question is too long (max {} characters)",
            MAX_QUESTION_CHARS
        )));
    }
    Ok(())
}

/// Generic follow-ups offered when the backend sends none.
pub fn default_follow_up_questions() -> Vec<String> {
    FOLLOW_UP_POOL.iter().take(3).map(|q| q.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct ChatService {
    client: ApiClient,
}

impl ChatService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ChatApi for ChatService {
    async fn ask_question(&self, document_id: &str, question: &str) -> Result<QuestionResponse> {
        validate_question(question)?;

        let request = QuestionRequest {
            document_id: document_id.to_string(),
            question: question.trim().to_string(),
        };
        info!(document_id, "asking question");

        let response: QuestionResponse = self.client.post("/ask-question", &request).await?;
        debug!(
            confidence = response.confidence_score,
            follow_ups = response.follow_up_questions.len(),
            "answer received"
        );
        Ok(response)
    }

    async fn get_suggested_questions(&self, document_id: &str) -> Result<Vec<String>> {
        let response: SuggestedQuestionsResponse = self
            .client
            .get(&format!("/suggest-questions/{}", document_id))
            .await?;
        Ok(response.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some("Please enter a question"))]
    #[case("    ", Some("Please enter a question"))]
    #[case("ok", Some("Question is too short"))]
    #[case("  hi  ", Some("Question is too short"))]
    #[case("Why?", None)]
    #[case("Can I terminate this agreement early?", None)]
    fn test_validate_question(#[case] input: &str, #[case] expected: Option<&str>) {
        match expected {
            None => assert!(validate_question(input).is_ok()),
            Some(msg) => assert_eq!(validate_question(input).unwrap_err().message(), msg),
        }
    }

    #[test]
    fn test_length_boundary() {
        assert!(validate_question(&"a".repeat(500)).is_ok());
        assert_eq!(
            validate_question(&"a".repeat(501)).unwrap_err().message(),
            "Question is too long (max 500 characters)"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(validate_question(&"\u{e9}".repeat(500)).is_ok());
    }

    #[test]
    fn test_default_follow_ups() {
        assert_eq!(
            default_follow_up_questions(),
            vec![
                "Can you explain this in simpler terms?",
                "What are the specific consequences?",
                "Are there any exceptions to this rule?",
            ]
        );
    }
}
