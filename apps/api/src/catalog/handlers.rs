use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::{Vehicle, VehicleType};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FleetQuery {
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
}

/// GET /api/v1/vehicles
pub async fn handle_list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<FleetQuery>,
) -> Json<Vec<Vehicle>> {
    let vehicles = match query.vehicle_type {
        Some(t) => state.catalog.of_type(t).cloned().collect(),
        None => state.catalog.vehicles().to_vec(),
    };
    Json(vehicles)
}

/// GET /api/v1/vehicles/:name
pub async fn handle_get_vehicle(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    state
        .catalog
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {name} not found")))
}
