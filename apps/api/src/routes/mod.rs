pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::booking::handlers::handle_create_booking;
use crate::catalog::handlers::{handle_get_vehicle, handle_list_vehicles};
use crate::recommendation::handlers::handle_recommend;
use crate::state::AppState;
use crate::support::handlers::handle_answer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/vehicles", get(handle_list_vehicles))
        .route("/api/v1/vehicles/:name", get(handle_get_vehicle))
        // Model-backed actions: always 200 with {data, error}
        .route("/api/v1/recommendations", post(handle_recommend))
        .route("/api/v1/support/answer", post(handle_answer))
        // Booking
        .route("/api/v1/bookings", post(handle_create_booking))
        .with_state(state)
}
