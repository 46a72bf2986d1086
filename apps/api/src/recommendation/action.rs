//! Action boundary for recommendations.
//!
//! The only place a failure becomes a terminal result. Callers always get an
//! `ActionResult`; internal detail goes to the log, never to the caller.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::envelope::ActionResult;
use crate::llm_client::TextGenerator;
use crate::recommendation::generation::{
    GenerationClient, RecommendationResponse, RECOMMENDATION_SCHEMA,
};
use crate::recommendation::post_validation::ensure_in_fleet;
use crate::recommendation::prompts::build_prompt;
use crate::recommendation::validation::{validate_request, RawRecommendationInput};
use crate::recommendation::RecommendationError;

pub const GENERATION_FAILED_MESSAGE: &str =
    "An unexpected error occurred while getting a recommendation. Please try again later.";
pub const NOT_IN_FLEET_MESSAGE: &str =
    "The recommended vehicle is not in our fleet. Please rephrase your request and try again.";

#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    generation: GenerationClient,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            catalog,
            generation: GenerationClient::new(generator),
        }
    }

    pub async fn recommend(
        &self,
        raw: &RawRecommendationInput,
    ) -> ActionResult<RecommendationResponse> {
        match self.run(raw).await {
            Ok(response) => {
                info!(car = %response.recommended_car, "recommendation served");
                ActionResult::success(response)
            }
            Err(e) => ActionResult::failure(user_message(&e)),
        }
    }

    async fn run(
        &self,
        raw: &RawRecommendationInput,
    ) -> Result<RecommendationResponse, RecommendationError> {
        let request = validate_request(raw)?;
        let prompt = build_prompt(&request, &self.catalog, &RECOMMENDATION_SCHEMA);
        let response = self
            .generation
            .generate(&prompt, &RECOMMENDATION_SCHEMA)
            .await?;
        ensure_in_fleet(response, &self.catalog)
    }
}

/// Logs the full error and returns what the caller may see.
fn user_message(e: &RecommendationError) -> String {
    match e {
        RecommendationError::Validation(errors) => {
            info!("recommendation input rejected: {errors}");
            errors.to_string()
        }
        RecommendationError::Generation(cause) => {
            error!("recommendation generation failed: {cause}");
            GENERATION_FAILED_MESSAGE.to_string()
        }
        RecommendationError::NotInFleet { recommended } => {
            warn!("recommendation rejected, not in fleet: {recommended}");
            NOT_IN_FLEET_MESSAGE.to_string()
        }
    }
}
