use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::envelope::{ActionResult, MALFORMED_BODY_MESSAGE};
use crate::recommendation::generation::RecommendationResponse;
use crate::recommendation::validation::RawRecommendationInput;
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Always answers 200 with `{data, error}`; even an unreadable body becomes
/// an `error` envelope rather than an extractor rejection.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Result<Json<RawRecommendationInput>, JsonRejection>,
) -> Json<ActionResult<RecommendationResponse>> {
    let Json(raw) = match body {
        Ok(body) => body,
        Err(rejection) => {
            info!("recommendation body rejected: {rejection}");
            return Json(ActionResult::failure(MALFORMED_BODY_MESSAGE));
        }
    };

    Json(state.recommender.recommend(&raw).await)
}
