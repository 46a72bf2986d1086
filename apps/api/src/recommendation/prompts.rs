// Prompt templates and builder for trip recommendations.
// The template text itself must never mention a vehicle by name: the fleet
// list is the only place names may appear.

use crate::catalog::{Catalog, Vehicle};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM, PERSONA};
use crate::recommendation::generation::OutputSchema;
use crate::recommendation::validation::RecommendationRequest;

/// System prompt for recommendation calls.
pub fn recommend_system() -> String {
    format!("{PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Replace: {persona}, {catalog}, {intended_use}, {preferences}, {distance}, {schema}
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"{persona}

A customer wants help choosing a rental car for a trip.

AVAILABLE VEHICLES (the complete fleet, one per line, format "<name>: <details>"):
{catalog}

CUSTOMER TRIP:
- Intended use: {intended_use}
- Preferences: {preferences}
- Distance: {distance}

HARD RULES:
1. Recommend EXACTLY ONE vehicle, chosen strictly from the list above. Never suggest anything that is not listed.
2. Copy the chosen name exactly as written before the colon, character for character, including capitalisation.
3. Write the explanation in Thai (ภาษาไทย) only, 1-3 short sentences on why the vehicle suits this trip.
4. Return ONLY a JSON object with this exact schema and no other fields:
{schema}"#;

const NOT_SPECIFIED: &str = "not specified";

/// `"<name>: type <type>, <seats> seats, suitable for <useCases>"`
pub fn vehicle_line(vehicle: &Vehicle) -> String {
    format!(
        "{}: type {}, {} seats, suitable for {}",
        vehicle.name, vehicle.vehicle_type, vehicle.seats, vehicle.use_cases
    )
}

/// One line per vehicle, catalog order.
pub fn catalog_block(catalog: &Catalog) -> String {
    catalog
        .vehicles()
        .iter()
        .map(vehicle_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the recommendation prompt. Deterministic for a given input.
pub fn build_prompt(
    request: &RecommendationRequest,
    catalog: &Catalog,
    schema: &OutputSchema,
) -> String {
    let distance = request
        .distance
        .map(|km| format!("{km} km"))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let fleet = catalog_block(catalog);
    let schema = schema.render();

    fill_template(
        RECOMMEND_PROMPT_TEMPLATE,
        &[
            ("persona", PERSONA),
            ("catalog", fleet.as_str()),
            ("intended_use", request.intended_use.as_str()),
            (
                "preferences",
                request.preferences.as_deref().unwrap_or(NOT_SPECIFIED),
            ),
            ("distance", distance.as_str()),
            ("schema", schema.as_str()),
        ],
    )
}
