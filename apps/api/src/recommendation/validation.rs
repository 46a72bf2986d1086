//! Request validation for trip recommendations.
//!
//! Pure and synchronous: never touches the model. Running it twice on the
//! same input yields the same request or the same error set.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;

/// Minimum trimmed length, in characters, of free-text fields.
pub const MIN_TEXT_CHARS: usize = 5;
/// Upper bound for the trip distance, in kilometres.
pub const MAX_DISTANCE_KM: f64 = 10_000.0;

/// Form input as submitted. `distance` may arrive as a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecommendationInput {
    pub intended_use: Option<String>,
    pub preferences: Option<String>,
    pub distance: Option<RawDistance>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDistance {
    Number(f64),
    Text(String),
    /// Any other JSON value; rejected as a field error, not a bad body.
    Other(serde_json::Value),
}

/// Validated, normalised trip parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub intended_use: String,
    pub preferences: Option<String>,
    pub distance: Option<f64>,
}

pub fn validate_request(
    raw: &RawRecommendationInput,
) -> Result<RecommendationRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let intended_use = match raw.intended_use.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push("intendedUse", "กรุณาระบุวัตถุประสงค์การเดินทาง");
            None
        }
        Some(text) if text.chars().count() < MIN_TEXT_CHARS => {
            errors.push(
                "intendedUse",
                format!("วัตถุประสงค์การเดินทางต้องมีอย่างน้อย {MIN_TEXT_CHARS} ตัวอักษร"),
            );
            None
        }
        Some(text) => Some(text.to_string()),
    };

    let preferences = match raw.preferences.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) if text.chars().count() < MIN_TEXT_CHARS => {
            errors.push(
                "preferences",
                format!("ความต้องการเพิ่มเติมต้องมีอย่างน้อย {MIN_TEXT_CHARS} ตัวอักษร"),
            );
            None
        }
        Some(text) => Some(text.to_string()),
    };

    let distance = match parse_distance(raw.distance.as_ref()) {
        Ok(d) => d,
        Err(message) => {
            errors.push("distance", message);
            None
        }
    };

    errors.into_result()?;

    Ok(RecommendationRequest {
        // Present whenever no error was recorded for it.
        intended_use: intended_use.unwrap_or_default(),
        preferences,
        distance,
    })
}

/// Blank text counts as "not given".
fn parse_distance(raw: Option<&RawDistance>) -> Result<Option<f64>, String> {
    let value = match raw {
        None => return Ok(None),
        Some(RawDistance::Number(n)) => *n,
        Some(RawDistance::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(RawDistance::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| "ระยะทางต้องเป็นตัวเลข".to_string())?,
        Some(RawDistance::Other(_)) => return Err("ระยะทางต้องเป็นตัวเลข".to_string()),
    };

    if !value.is_finite() {
        return Err("ระยะทางต้องเป็นตัวเลข".to_string());
    }
    if value <= 0.0 {
        return Err("ระยะทางต้องมากกว่า 0 กิโลเมตร".to_string());
    }
    if value > MAX_DISTANCE_KM {
        return Err(format!("ระยะทางต้องไม่เกิน {} กิโลเมตร", MAX_DISTANCE_KM as u32));
    }
    Ok(Some(value))
}
