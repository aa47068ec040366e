use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::service;
use super::types::{BookingHistoryEntry, CustomerBooking};
use crate::error::AppError;
use crate::state::AppState;

/// Every booking with the customer and room it belongs to.
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerBooking>>, AppError> {
    let rows = state
        .store()
        .customer_bookings(None)
        .await
        .map_err(AppError::store("Failed to get customers"))?;

    Ok(Json(rows.into_iter().map(CustomerBooking::from).collect()))
}

pub async fn booking_history(
    State(state): State<AppState>,
    customer_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<BookingHistoryEntry>>, AppError> {
    let Path(customer_name) = customer_name?;
    let history = service::booking_history(state.store(), &customer_name)
        .await
        .map_err(AppError::store("Failed to get booking history"))?;

    Ok(Json(history))
}
