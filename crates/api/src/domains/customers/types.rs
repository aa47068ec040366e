use infra::{models::CustomerBookingRow, overlap::BookedStatus};
use serde::Serialize;
use uuid::Uuid;

/// One entry of `GET /customers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBooking {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<CustomerBookingRow> for CustomerBooking {
    fn from(row: CustomerBookingRow) -> Self {
        Self {
            customer_name: row.customer_name,
            room_name: row.room_name,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHistoryEntry {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: Uuid,
    pub booking_date: String,
    pub booked_status: BookedStatus,
}

impl BookingHistoryEntry {
    pub fn new(row: CustomerBookingRow, booked_status: BookedStatus) -> Self {
        Self {
            booking_date: row.date.clone(),
            customer_name: row.customer_name,
            room_name: row.room_name,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            booking_id: row.booking_id,
            booked_status,
        }
    }
}
