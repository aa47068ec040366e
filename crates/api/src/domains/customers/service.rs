use std::collections::{HashMap, hash_map::Entry};

use infra::{
    HallStore,
    models::{BookingRow, CustomerBookingRow},
    overlap::{BookedStatus, history_overlaps},
};
use uuid::Uuid;

use super::types::BookingHistoryEntry;

/// Status of a history row given every booking of its room.
///
/// The row's own booking is skipped; any other booking on the same date that
/// satisfies [`history_overlaps`] marks the row as booked.
pub fn booked_status_for(row: &CustomerBookingRow, room_bookings: &[BookingRow]) -> BookedStatus {
    room_bookings
        .iter()
        .filter(|other| other.id != row.booking_id && other.date == row.date)
        .any(|other| history_overlaps(row.interval(), other.interval()))
        .into()
}

/// All bookings made under `customer_name` (exact match), each with its
/// room's name and booked status. Unknown customers yield an empty list.
pub async fn booking_history(
    store: &dyn HallStore,
    customer_name: &str,
) -> sqlx::Result<Vec<BookingHistoryEntry>> {
    let rows = store.customer_bookings(Some(customer_name)).await?;

    let mut room_bookings: HashMap<Uuid, Vec<BookingRow>> = HashMap::new();
    for row in &rows {
        if let Entry::Vacant(slot) = room_bookings.entry(row.room_id) {
            slot.insert(store.list_bookings_for_room(row.room_id).await?);
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let status = room_bookings
                .get(&row.room_id)
                .map(|bookings| booked_status_for(&row, bookings))
                .unwrap_or(BookedStatus::Available);
            BookingHistoryEntry::new(row, status)
        })
        .collect())
}
