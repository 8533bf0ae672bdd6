use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Booking, BookingRequest};
use crate::services::bookings;
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let booking = bookings::create_booking(&state, req).await?;
    Ok(Json(booking))
}

// GET /api/bookings/availability
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: String,
    pub end_date: String,
}

/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which is
/// what calendar frontends tend to send; a bare date means midnight UTC.
fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(AppError::Validation(format!(
        "{field} is not a valid timestamp or date"
    )))
}

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let start = parse_date("start_date", &query.start_date)?;
    let end = parse_date("end_date", &query.end_date)?;

    let slots = bookings::get_availability(&state, &start, &end)?;
    Ok(Json(serde_json::json!({ "blocked_slots": slots })))
}
