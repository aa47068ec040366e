use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use sqlx::Result as SqlxResult;
use uuid::Uuid;

use super::{BookingOutcome, HallStore};
use crate::models::{BookingRow, CustomerBookingRow, RoomRow};
use crate::overlap::Slot;
use crate::repos::{CreateBooking, CreateRoom};

#[derive(Default)]
struct Tables {
    rooms: Vec<RoomRow>,
    bookings: Vec<BookingRow>,
}

impl Tables {
    fn find_conflict(&self, slot: &Slot) -> Option<&BookingRow> {
        self.bookings.iter().find(|b| b.conflicts_with(slot))
    }
}

/// Process-local store. Rows live in insertion order and vanish with the
/// process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HallStore for MemoryStore {
    async fn ping(&self) -> SqlxResult<()> {
        Ok(())
    }

    async fn create_room(&self, data: CreateRoom) -> SqlxResult<RoomRow> {
        let row = RoomRow {
            id: Uuid::new_v4(),
            room_name: data.room_name,
            seats_available: data.seats_available,
            amenities: data.amenities,
            price_per_hour: data.price_per_hour,
            created_at: Utc::now(),
        };
        self.tables.write().rooms.push(row.clone());
        Ok(row)
    }

    async fn list_rooms(&self) -> SqlxResult<Vec<RoomRow>> {
        Ok(self.tables.read().rooms.clone())
    }

    async fn list_bookings_for_room(&self, room_id: Uuid) -> SqlxResult<Vec<BookingRow>> {
        Ok(self
            .tables
            .read()
            .bookings
            .iter()
            .filter(|b| b.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn find_conflict(&self, slot: &Slot) -> SqlxResult<Option<BookingRow>> {
        Ok(self.tables.read().find_conflict(slot).cloned())
    }

    async fn book_if_free(&self, data: CreateBooking) -> SqlxResult<BookingOutcome> {
        let mut tables = self.tables.write();

        if !tables.rooms.iter().any(|r| r.id == data.slot.room_id) {
            return Ok(BookingOutcome::UnknownRoom);
        }
        if let Some(existing) = tables.find_conflict(&data.slot) {
            return Ok(BookingOutcome::Conflict(existing.clone()));
        }

        let CreateBooking {
            customer_name,
            slot,
        } = data;
        let row = BookingRow {
            id: Uuid::new_v4(),
            room_id: slot.room_id,
            customer_name,
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            created_at: Utc::now(),
        };
        tables.bookings.push(row.clone());

        Ok(BookingOutcome::Created(row))
    }

    async fn customer_bookings(
        &self,
        customer_name: Option<&str>,
    ) -> SqlxResult<Vec<CustomerBookingRow>> {
        let tables = self.tables.read();

        Ok(tables
            .bookings
            .iter()
            .filter(|b| customer_name.is_none_or(|name| b.customer_name == name))
            .filter_map(|b| {
                let room = tables.rooms.iter().find(|r| r.id == b.room_id)?;
                Some(CustomerBookingRow {
                    booking_id: b.id,
                    room_id: b.room_id,
                    room_name: room.room_name.clone(),
                    customer_name: b.customer_name.clone(),
                    date: b.date.clone(),
                    start_time: b.start_time.clone(),
                    end_time: b.end_time.clone(),
                })
            })
            .collect())
    }
}
