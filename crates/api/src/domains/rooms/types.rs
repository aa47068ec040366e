use chrono::{DateTime, Utc};
use infra::{
    models::{BookingRow, RoomRow},
    overlap::BookedStatus,
    repos::CreateRoom,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub room_name: String,
    pub seats_available: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

impl TryFrom<CreateRoomRequest> for CreateRoom {
    type Error = AppError;

    fn try_from(req: CreateRoomRequest) -> Result<Self, Self::Error> {
        if req.room_name.trim().is_empty() {
            return Err(AppError::BadRequest("roomName must not be empty".to_string()));
        }
        if req.seats_available < 0 {
            return Err(AppError::BadRequest(
                "seatsAvailable must not be negative".to_string(),
            ));
        }
        if !req.price_per_hour.is_finite() || req.price_per_hour < 0.0 {
            return Err(AppError::BadRequest(
                "pricePerHour must be a non-negative number".to_string(),
            ));
        }

        Ok(CreateRoom {
            room_name: req.room_name,
            seats_available: req.seats_available,
            amenities: req.amenities,
            price_per_hour: req.price_per_hour,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub message: &'static str,
    pub room_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            room_id: row.room_id,
            customer_name: row.customer_name,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
        }
    }
}

/// One entry of `GET /rooms`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithBookings {
    pub room_name: String,
    pub booked_status: BookedStatus,
    pub bookings: Vec<Booking>,
}

impl RoomWithBookings {
    /// A room counts as booked once it has any booking at all.
    pub fn new(room: RoomRow, bookings: Vec<BookingRow>) -> Self {
        Self {
            room_name: room.room_name,
            booked_status: BookedStatus::from(!bookings.is_empty()),
            bookings: bookings.into_iter().map(Booking::from).collect(),
        }
    }
}
