// Trip recommendations: validate → build prompt → generate → post-validate.
// The model is reached only through the injected TextGenerator.

pub mod action;
pub mod generation;
pub mod handlers;
pub mod post_validation;
pub mod prompts;
pub mod validation;

use thiserror::Error;

use crate::errors::ValidationErrors;
use crate::recommendation::generation::GenerationFailure;

/// Every way a recommendation can fail. Mapped to a user message only at
/// the action boundary.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationFailure),

    #[error("recommended vehicle not in fleet: {recommended}")]
    NotInFleet { recommended: String },
}
