use chrono::{NaiveDate, NaiveTime};
use infra::{overlap::Slot, repos::CreateBooking};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub message: &'static str,
    pub booking_id: Uuid,
}

// Conflict checks compare the raw text, so a value is accepted only if it
// formats back to itself.
fn parse_date(raw: &str) -> Result<(), AppError> {
    let canonical = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string() == raw)
        .unwrap_or(false);
    if canonical {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "date must be formatted as YYYY-MM-DD, got `{raw}`"
        )))
    }
}

fn parse_time(field: &str, raw: &str) -> Result<(), AppError> {
    let canonical = NaiveTime::parse_from_str(raw, "%H:%M")
        .map(|t| t.format("%H:%M").to_string() == raw)
        .unwrap_or(false);
    if canonical {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be formatted as HH:MM, got `{raw}`"
        )))
    }
}

impl TryFrom<CreateBookingRequest> for CreateBooking {
    type Error = AppError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let room_id = Uuid::parse_str(req.room_id.trim())
            .map_err(|_| AppError::BadRequest(format!("Invalid roomId `{}`", req.room_id)))?;

        if req.customer_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "customerName must not be empty".to_string(),
            ));
        }
        parse_date(&req.date)?;
        parse_time("startTime", &req.start_time)?;
        parse_time("endTime", &req.end_time)?;
        if req.start_time >= req.end_time {
            return Err(AppError::BadRequest(
                "startTime must be before endTime".to_string(),
            ));
        }

        Ok(CreateBooking {
            customer_name: req.customer_name,
            slot: Slot {
                room_id,
                date: req.date,
                start_time: req.start_time,
                end_time: req.end_time,
            },
        })
    }
}
