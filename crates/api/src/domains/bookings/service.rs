use infra::{BookingOutcome, HallStore, models::BookingRow, repos::CreateBooking};

use crate::error::AppError;

pub const CONFLICT_MESSAGE: &str = "Room is already booked for the given date and time";
const CREATE_FAILED: &str = "Failed to create booking";

/// Book the slot unless it collides with an existing booking on the same
/// room and date. Nothing is written on rejection.
pub async fn create_booking(
    store: &dyn HallStore,
    data: CreateBooking,
) -> Result<BookingRow, AppError> {
    let room_id = data.slot.room_id;

    match store
        .book_if_free(data)
        .await
        .map_err(AppError::store(CREATE_FAILED))?
    {
        BookingOutcome::Created(row) => {
            tracing::info!(
                booking_id = %row.id,
                room_id = %row.room_id,
                date = %row.date,
                "Room booked"
            );
            Ok(row)
        }
        BookingOutcome::Conflict(existing) => {
            tracing::info!(
                %room_id,
                conflicting_booking = %existing.id,
                "Booking rejected: slot taken"
            );
            Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()))
        }
        BookingOutcome::UnknownRoom => Err(AppError::NotFound("Room not found".to_string())),
    }
}
