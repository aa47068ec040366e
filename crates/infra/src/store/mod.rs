mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use sqlx::Result as SqlxResult;
use uuid::Uuid;

use crate::models::{BookingRow, CustomerBookingRow, RoomRow};
use crate::overlap::Slot;
use crate::repos::{CreateBooking, CreateRoom};

/// What happened to a booking request handed to [`HallStore::book_if_free`].
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Created(BookingRow),
    /// Nothing was written; carries the first booking the slot collides with.
    Conflict(BookingRow),
    UnknownRoom,
}

/// Room and booking persistence shared by every request handler.
#[async_trait]
pub trait HallStore: Send + Sync {
    /// Cheap round-trip proving the store is reachable.
    async fn ping(&self) -> SqlxResult<()>;

    async fn create_room(&self, data: CreateRoom) -> SqlxResult<RoomRow>;

    async fn list_rooms(&self) -> SqlxResult<Vec<RoomRow>>;

    async fn list_bookings_for_room(&self, room_id: Uuid) -> SqlxResult<Vec<BookingRow>>;

    /// Read-only conflict check for `slot` against existing bookings.
    async fn find_conflict(&self, slot: &Slot) -> SqlxResult<Option<BookingRow>>;

    /// Check for a conflict and insert the booking as one step. Concurrent
    /// calls for the same room are serialized by the store.
    async fn book_if_free(&self, data: CreateBooking) -> SqlxResult<BookingOutcome>;

    /// Bookings joined with their room name, in insertion order.
    async fn customer_bookings(
        &self,
        customer_name: Option<&str>,
    ) -> SqlxResult<Vec<CustomerBookingRow>>;
}
