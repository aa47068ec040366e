use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
    response::Html,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::domains::{bookings, customers, rooms};
use crate::error::AppError;
use crate::state::AppState;

const INDEX_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Hall Booking API</title></head>
<body style="font-family:sans-serif;max-width:48rem;margin:2rem auto">
<h2>Hall Booking API</h2>
<p>Register rooms and book them by date and time. A booking is refused when it
overlaps an existing booking for the same room and date.</p>
<ul>
<li><b>POST /rooms</b> &mdash; create a room from <code>roomName</code>,
<code>seatsAvailable</code>, <code>amenities</code> and <code>pricePerHour</code>.</li>
<li><b>POST /bookings</b> &mdash; book a room with <code>customerName</code>,
<code>date</code> (YYYY-MM-DD), <code>startTime</code>, <code>endTime</code> (HH:MM)
and <code>roomId</code>.</li>
<li><b>GET /rooms</b> &mdash; every room with its bookings and booked status.</li>
<li><b>GET /customers</b> &mdash; every booking with customer and room name.</li>
<li><b>GET /customer/{customerName}/booking-history</b> &mdash; one customer's
bookings.</li>
</ul>
</body>
</html>
"#;

/// Build the Axum router with the booking routes and default middleware.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        .route("/", get(index))
        // Simple liveness check; also proves store connectivity.
        .route("/health", get(health))
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route("/bookings", post(bookings::create_booking))
        .route("/customers", get(customers::list_customers))
        .route(
            "/customer/{customer_name}/booking-history",
            get(customers::booking_history),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store().ping().await?;
    Ok("ok")
}
