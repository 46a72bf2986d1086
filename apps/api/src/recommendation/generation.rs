//! Generation Client: one model call per recommendation, schema-checked.
//!
//! The model is untrusted. This layer only guarantees the reply is a JSON
//! object carrying the declared fields; whether the named vehicle exists is
//! checked afterwards by `post_validation`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::{strip_json_fences, ChatMessage, LlmError, TextGenerator};
use crate::recommendation::prompts::recommend_system;

#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("response is not valid JSON: {0}")]
    Unparseable(#[from] serde_json::Error),

    #[error("response violates schema: {0}")]
    Schema(String),
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub name: &'static str,
    pub description: &'static str,
}

/// A flat JSON object of required, non-blank string fields.
#[derive(Debug, Clone, Copy)]
pub struct OutputSchema {
    pub fields: &'static [SchemaField],
}

pub const RECOMMENDATION_SCHEMA: OutputSchema = OutputSchema {
    fields: &[
        SchemaField {
            name: "recommendedCar",
            description: "the exact vehicle name copied from the list",
        },
        SchemaField {
            name: "recommendation",
            description: "1-3 sentences in Thai explaining why it fits the trip",
        },
    ],
};

impl OutputSchema {
    /// The shape shown to the model, one field per line.
    pub fn render(&self) -> String {
        let body = self
            .fields
            .iter()
            .map(|f| format!("  \"{}\": \"<string: {}>\"", f.name, f.description))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{{\n{body}\n}}")
    }

    pub fn check(&self, value: &Value) -> Result<(), String> {
        let object = value
            .as_object()
            .ok_or_else(|| "expected a JSON object".to_string())?;

        for field in self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    return Err(format!("missing required field '{}'", field.name))
                }
                Some(Value::String(s)) if s.trim().is_empty() => {
                    return Err(format!("field '{}' is blank", field.name))
                }
                Some(Value::String(_)) => {}
                Some(_) => return Err(format!("field '{}' must be a string", field.name)),
            }
        }
        Ok(())
    }
}

/// What the model chose. `recommended_car` is unverified at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommended_car: String,
    pub recommendation: String,
}

/// Wraps the injected `TextGenerator`. Holds no state between calls.
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Exactly one model call; no retries.
    pub async fn generate(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<RecommendationResponse, GenerationFailure> {
        let text = self
            .generator
            .complete(&recommend_system(), &[ChatMessage::user(prompt)])
            .await?;

        let text = strip_json_fences(&text);
        if text.is_empty() {
            return Err(LlmError::EmptyContent.into());
        }
        debug!("recommendation raw reply: {text}");

        let value: Value = serde_json::from_str(text)?;
        schema.check(&value).map_err(GenerationFailure::Schema)?;

        // The car name stays byte-exact for the fleet check.
        let mut response: RecommendationResponse = serde_json::from_value(value)?;
        response.recommendation = response.recommendation.trim().to_string();
        Ok(response)
    }
}
