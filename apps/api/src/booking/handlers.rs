use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::booking::validation::{validate_booking, BookingRequest, ValidatedBooking};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub vehicle_name: String,
    pub location: String,
    pub pickup_date_time: DateTime<Utc>,
    pub return_date_time: DateTime<Utc>,
    pub rental_days: u32,
    /// Daily price × rental days, in baht. Deposit not included.
    pub estimated_price: u64,
}

impl BookingConfirmation {
    fn new(booking: &ValidatedBooking) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            vehicle_name: booking.vehicle.name.clone(),
            location: booking.location_label(),
            pickup_date_time: booking.pickup,
            return_date_time: booking.return_at,
            rental_days: booking.rental_days(),
            estimated_price: booking.estimated_price(),
        }
    }
}

/// POST /api/v1/bookings
pub async fn handle_create_booking(
    State(state): State<AppState>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let booking = validate_booking(&request, &state.catalog, Utc::now())?;
    let confirmation = BookingConfirmation::new(&booking);

    info!(
        booking_id = %confirmation.booking_id,
        vehicle = %confirmation.vehicle_name,
        location = %confirmation.location,
        days = confirmation.rental_days,
        "booking received"
    );
    debug!(
        booking_id = %confirmation.booking_id,
        customer = %booking.customer_name,
        phone = %booking.phone,
        contact = ?booking.contact,
        special_requests = ?booking.special_requests,
        "booking contact details"
    );

    Ok((StatusCode::CREATED, Json(confirmation)))
}
