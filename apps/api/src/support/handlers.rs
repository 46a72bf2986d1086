use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::envelope::{ActionResult, MALFORMED_BODY_MESSAGE};
use crate::state::AppState;
use crate::support::agent::{Answer, AnswerQuestionInput};

/// POST /api/v1/support/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    body: Result<Json<AnswerQuestionInput>, JsonRejection>,
) -> Json<ActionResult<Answer>> {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            info!("support body rejected: {rejection}");
            return Json(ActionResult::failure(MALFORMED_BODY_MESSAGE));
        }
    };

    Json(state.support.answer(&input).await)
}
