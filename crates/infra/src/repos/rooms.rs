use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::RoomRow;

#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub room_name: String,
    pub seats_available: i32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateRoom) -> SqlxResult<RoomRow> {
    sqlx::query_as::<_, RoomRow>(
        r#"
        INSERT INTO rooms (room_name, seats_available, amenities, price_per_hour)
        VALUES ($1, $2, $3, $4)
        RETURNING id, room_name, seats_available, amenities, price_per_hour, created_at
        "#,
    )
    .bind(data.room_name)
    .bind(data.seats_available)
    .bind(data.amenities)
    .bind(data.price_per_hour)
    .fetch_one(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<RoomRow>> {
    sqlx::query_as::<_, RoomRow>(
        r#"
        SELECT id, room_name, seats_available, amenities, price_per_hour, created_at
        FROM rooms
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Lock the room row for the rest of the transaction.
/// Returns `None` when the room does not exist.
pub async fn lock_for_booking<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<Uuid>> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(executor)
        .await
}
