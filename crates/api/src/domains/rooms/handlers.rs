use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::future::try_join_all;
use infra::repos::CreateRoom;

use super::types::{CreateRoomRequest, CreateRoomResponse, RoomWithBookings};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let data = CreateRoom::try_from(req)?;

    let room = state
        .store()
        .create_room(data)
        .await
        .map_err(AppError::store("Failed to create room."))?;
    tracing::info!(room_id = %room.id, room_name = %room.room_name, "Room created");

    Ok((
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            message: "Room Created",
            room_id: room.id,
        }),
    ))
}

/// Every room with its bookings and derived booked status.
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomWithBookings>>, AppError> {
    let store = state.store();
    let rooms = store
        .list_rooms()
        .await
        .map_err(AppError::store("Failed to get rooms"))?;

    let listed = try_join_all(rooms.into_iter().map(|room| async move {
        let bookings = store.list_bookings_for_room(room.id).await?;
        Ok::<_, sqlx::Error>(RoomWithBookings::new(room, bookings))
    }))
    .await
    .map_err(AppError::store("Failed to get rooms"))?;

    Ok(Json(listed))
}
