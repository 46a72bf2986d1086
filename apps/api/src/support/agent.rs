//! Support agent: answers customer questions with the conversation so far.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::envelope::ActionResult;
use crate::errors::ValidationErrors;
use crate::llm_client::{ChatMessage, ChatRole, LlmError, TextGenerator};
use crate::support::prompts::support_system;

/// Only the most recent messages are sent back to the model.
pub const MAX_HISTORY_MESSAGES: usize = 20;

pub const ANSWER_FAILED_MESSAGE: &str =
    "An unexpected error occurred while getting an answer. Please try again later.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQuestionInput {
    #[serde(default)]
    pub question: String,
    pub chat_history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
}

#[derive(Debug, Error)]
pub enum SupportError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("answer generation failed: {0}")]
    Llm(#[from] LlmError),
}

#[derive(Clone)]
pub struct SupportAgent {
    catalog: Arc<Catalog>,
    generator: Arc<dyn TextGenerator>,
}

impl SupportAgent {
    pub fn new(catalog: Arc<Catalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    pub async fn answer(&self, input: &AnswerQuestionInput) -> ActionResult<Answer> {
        match self.run(input).await {
            Ok(answer) => ActionResult::success(answer),
            Err(SupportError::Validation(errors)) => {
                info!("support question rejected: {errors}");
                ActionResult::failure(errors.to_string())
            }
            Err(e) => {
                error!("support answer failed: {e}");
                ActionResult::failure(ANSWER_FAILED_MESSAGE)
            }
        }
    }

    async fn run(&self, input: &AnswerQuestionInput) -> Result<Answer, SupportError> {
        let messages = conversation(input)?;
        let text = self
            .generator
            .complete(&support_system(&self.catalog), &messages)
            .await?;

        let answer = text.trim();
        if answer.is_empty() {
            return Err(LlmError::EmptyContent.into());
        }
        Ok(Answer {
            answer: answer.to_string(),
        })
    }
}

/// Validates the input and assembles the messages to send: the trimmed
/// history tail followed by the new question.
pub fn conversation(input: &AnswerQuestionInput) -> Result<Vec<ChatMessage>, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let question = input.question.trim();
    if question.is_empty() {
        errors.push("question", "กรุณาพิมพ์คำถาม");
    }

    let history = input.chat_history.as_deref().unwrap_or_default();
    if history.iter().any(|m| m.content.trim().is_empty()) {
        errors.push("chatHistory", "ข้อความในประวัติการสนทนาต้องไม่ว่าง");
    }

    errors.into_result()?;

    let start = history.len().saturating_sub(MAX_HISTORY_MESSAGES);
    // The provider requires the conversation to open with a user turn.
    let tail = history[start..]
        .iter()
        .skip_while(|m| m.role == ChatRole::Model);

    let mut messages: Vec<ChatMessage> = tail.cloned().collect();
    messages.push(ChatMessage::user(question));
    Ok(messages)
}
