use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use infra::repos::CreateBooking;

use super::service;
use super::types::{CreateBookingRequest, CreateBookingResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let data = CreateBooking::try_from(req)?;

    let booking = service::create_booking(state.store(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Room Booked",
            booking_id: booking.id,
        }),
    ))
}
