mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_create_booking_returns_id() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;

    let response = app
        .book("Alice", &room_id, "2024-01-01", "09:00", "10:00")
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Room Booked");
    assert!(uuid::Uuid::parse_str(body["bookingId"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_overlapping_booking_is_rejected_and_not_stored() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;

    let first = app
        .book("Alice", &room_id, "2024-01-01", "09:00", "10:00")
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let clash = app
        .book("Bob", &room_id, "2024-01-01", "09:30", "10:30")
        .await;
    assert_eq!(clash.status(), StatusCode::BAD_REQUEST);
    let body: Value = clash.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Room is already booked for the given date and time"
    );

    let rooms = app.get_json("/rooms").await;
    let bookings = rooms[0]["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["customerName"], "Alice");
}

#[tokio::test]
async fn test_back_to_back_bookings_do_not_conflict() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;

    for (start, end) in [("09:00", "10:00"), ("10:00", "11:00"), ("08:00", "09:00")] {
        let response = app
            .book("Alice", &room_id, "2024-01-01", start, end)
            .await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "{start}-{end} should fit next to 09:00-10:00"
        );
    }
}

#[tokio::test]
async fn test_covering_and_nested_bookings_conflict() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;
    app.book("Alice", &room_id, "2024-01-01", "10:00", "12:00")
        .await;

    for (start, end) in [("09:00", "13:00"), ("10:30", "11:30"), ("10:00", "12:00")] {
        let response = app.book("Bob", &room_id, "2024-01-01", start, end).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{start}-{end} should collide with 10:00-12:00"
        );
    }
}

#[tokio::test]
async fn test_same_slot_on_other_day_or_room_is_allowed() {
    let app = spawn_app().await;
    let hall_a = app.create_room("Hall A").await;
    let hall_b = app.create_room("Hall B").await;
    app.book("Alice", &hall_a, "2024-01-01", "09:00", "10:00")
        .await;

    let other_room = app
        .book("Bob", &hall_b, "2024-01-01", "09:00", "10:00")
        .await;
    assert_eq!(other_room.status(), StatusCode::CREATED);

    let other_day = app
        .book("Bob", &hall_a, "2024-01-02", "09:00", "10:00")
        .await;
    assert_eq!(other_day.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_booking_requests_are_rejected() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;

    let bad_room = app
        .book("Alice", "not-a-room-id", "2024-01-01", "09:00", "10:00")
        .await;
    assert_eq!(bad_room.status(), StatusCode::BAD_REQUEST);

    let bad_time = app
        .book("Alice", &room_id, "2024-01-01", "9am", "10:00")
        .await;
    assert_eq!(bad_time.status(), StatusCode::BAD_REQUEST);

    let reversed = app
        .book("Alice", &room_id, "2024-01-01", "11:00", "10:00")
        .await;
    assert_eq!(reversed.status(), StatusCode::BAD_REQUEST);

    let not_json = app
        .client
        .post(format!("{}/bookings", app.address))
        .header("content-type", "application/json")
        .body("{")
        .send()
        .await
        .unwrap();
    assert_eq!(not_json.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unknown_room_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .book(
            "Alice",
            &uuid::Uuid::new_v4().to_string(),
            "2024-01-01",
            "09:00",
            "10:00",
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_overlapping_requests_book_once() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;

    let (first, second) = tokio::join!(
        app.book("Alice", &room_id, "2024-01-01", "09:00", "10:00"),
        app.book("Bob", &room_id, "2024-01-01", "09:00", "10:00"),
    );

    let mut statuses = vec![first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);
}

#[tokio::test]
async fn test_space_padded_tokens_cannot_double_book() {
    let app = spawn_app().await;
    let room_id = app.create_room("Hall A").await;
    app.book("Alice", &room_id, "2024-01-01", "09:00", "10:00")
        .await;

    let nested = app
        .book("Bob", &room_id, "2024-01-01", " 9:00", " 9:30")
        .await;
    assert_eq!(nested.status(), StatusCode::BAD_REQUEST);

    let other_spelling = app
        .book("Bob", &room_id, " 2024-1-01", "09:00", "10:00")
        .await;
    assert_eq!(other_spelling.status(), StatusCode::BAD_REQUEST);

    let rooms = app.get_json("/rooms").await;
    assert_eq!(rooms[0]["bookings"].as_array().unwrap().len(), 1);
}
