use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{BookingRow, CustomerBookingRow};
use crate::overlap::Slot;

#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub customer_name: String,
    pub slot: Slot,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateBooking,
) -> SqlxResult<BookingRow> {
    sqlx::query_as::<_, BookingRow>(
        r#"
        INSERT INTO bookings (room_id, customer_name, date, start_time, end_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, room_id, customer_name, date, start_time, end_time, created_at
        "#,
    )
    .bind(data.slot.room_id)
    .bind(&data.customer_name)
    .bind(&data.slot.date)
    .bind(&data.slot.start_time)
    .bind(&data.slot.end_time)
    .fetch_one(executor)
    .await
}

pub async fn list_by_room<'e>(
    executor: impl PgExecutor<'e>,
    room_id: Uuid,
) -> SqlxResult<Vec<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT id, room_id, customer_name, date, start_time, end_time, created_at
        FROM bookings
        WHERE room_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(executor)
    .await
}

/// First booking on the slot's room and date that conflicts with it.
///
/// Mirrors `overlap::conflicts` with `$3`/`$4` as the candidate interval.
pub async fn find_conflict<'e>(
    executor: impl PgExecutor<'e>,
    slot: &Slot,
) -> SqlxResult<Option<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT id, room_id, customer_name, date, start_time, end_time, created_at
        FROM bookings
        WHERE room_id = $1
          AND date = $2
          AND (
                (start_time < $3 AND $3 < end_time)
             OR (start_time < $4 AND $4 < end_time)
             OR ($3 <= start_time AND $4 >= end_time)
          )
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(slot.room_id)
    .bind(&slot.date)
    .bind(&slot.start_time)
    .bind(&slot.end_time)
    .fetch_optional(executor)
    .await
}

/// Bookings joined with their room name, optionally narrowed to one customer.
/// Bookings whose room is missing are left out.
pub async fn list_with_room<'e>(
    executor: impl PgExecutor<'e>,
    customer_name: Option<&str>,
) -> SqlxResult<Vec<CustomerBookingRow>> {
    sqlx::query_as::<_, CustomerBookingRow>(
        r#"
        SELECT b.id AS booking_id, b.room_id, r.room_name, b.customer_name,
               b.date, b.start_time, b.end_time
        FROM bookings b
        INNER JOIN rooms r ON r.id = b.room_id
        WHERE ($1::TEXT IS NULL OR b.customer_name = $1)
        ORDER BY b.created_at ASC, b.id ASC
        "#,
    )
    .bind(customer_name)
    .fetch_all(executor)
    .await
}
