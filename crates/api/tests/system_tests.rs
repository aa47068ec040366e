mod common;

use common::*;
use reqwest::StatusCode;

#[tokio::test]
async fn test_index_describes_the_api() {
    let app = spawn_app().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains("Hall Booking API"));
    assert!(page.contains("/customer/{customerName}/booking-history"));
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = spawn_app().await;

    let response = app.get("/halls").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
