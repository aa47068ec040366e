use std::sync::Arc;

use hall_api::{AppConfig, AppState, build_router};
use infra::MemoryStore;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

/// Serve the full router on an ephemeral port, backed by a fresh
/// in-memory store.
pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = build_router(state, &AppConfig::in_memory());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    TestApp {
        address: format!("http://{addr}"),
        client: Client::new(),
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    #[allow(dead_code)]
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path} should succeed");
        response.json().await.expect("Response should be JSON")
    }

    /// Create a room and return its id.
    #[allow(dead_code)]
    pub async fn create_room(&self, name: &str) -> String {
        let response = self
            .post_json(
                "/rooms",
                &json!({
                    "roomName": name,
                    "seatsAvailable": 40,
                    "amenities": ["projector", "air conditioning"],
                    "pricePerHour": 25.5
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = response.json().await.expect("Response should be JSON");
        body["roomId"]
            .as_str()
            .expect("roomId should be a string")
            .to_string()
    }

    #[allow(dead_code)]
    pub async fn book(
        &self,
        customer: &str,
        room_id: &str,
        date: &str,
        start: &str,
        end: &str,
    ) -> Response {
        self.post_json(
            "/bookings",
            &json!({
                "customerName": customer,
                "date": date,
                "startTime": start,
                "endTime": end,
                "roomId": room_id
            }),
        )
        .await
    }
}
