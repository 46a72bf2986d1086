//! Post-validation: the guard against hallucinated vehicles.

use tracing::warn;

use crate::catalog::Catalog;
use crate::recommendation::generation::RecommendationResponse;
use crate::recommendation::RecommendationError;

/// Accepts the response only if `recommended_car` names a catalog vehicle
/// exactly (case-sensitive).
pub fn ensure_in_fleet(
    response: RecommendationResponse,
    catalog: &Catalog,
) -> Result<RecommendationResponse, RecommendationError> {
    if catalog.contains(&response.recommended_car) {
        return Ok(response);
    }

    warn!(
        recommended = %response.recommended_car,
        "model recommended a vehicle outside the fleet"
    );
    Err(RecommendationError::NotInFleet {
        recommended: response.recommended_car,
    })
}
