use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::overlap::{Interval, Slot};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RoomRow {
    pub id: Uuid,
    pub room_name: String,
    pub seats_available: i32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl BookingRow {
    pub fn interval(&self) -> Interval<'_> {
        Interval::new(&self.start_time, &self.end_time)
    }

    /// Whether `slot` conflicts with this booking: same room, same date and
    /// overlapping per [`crate::overlap::conflicts`].
    pub fn conflicts_with(&self, slot: &Slot) -> bool {
        self.room_id == slot.room_id
            && self.date == slot.date
            && crate::overlap::conflicts(slot.interval(), self.interval())
    }
}

/// A booking joined with the name of the room it references.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CustomerBookingRow {
    pub booking_id: Uuid,
    pub room_id: Uuid,
    pub room_name: String,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl CustomerBookingRow {
    pub fn interval(&self) -> Interval<'_> {
        Interval::new(&self.start_time, &self.end_time)
    }
}
