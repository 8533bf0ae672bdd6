//! Booking record manager: creation, end-date derivation, status
//! transitions, and availability-window queries.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{
    is_well_formed_email, BlockedSlot, Booking, BookingRequest, BookingStatus, PackageType,
    ServiceType,
};
use crate::services::notify;
use crate::state::AppState;

/// Shape-checks the intake payload and builds the record to persist.
/// Everything here runs before any write, so a rejected request leaves no
/// trace in storage.
fn validate(req: BookingRequest) -> Result<Booking, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if !is_well_formed_email(&req.email) {
        return Err(AppError::Validation("email is not well-formed".to_string()));
    }
    if req.phone.trim().is_empty() {
        return Err(AppError::Validation("phone is required".to_string()));
    }

    let service_type = ServiceType::parse(&req.service_type)
        .ok_or_else(|| AppError::Validation(format!("unknown service type: {}", req.service_type)))?;

    let package_type = req
        .package_type
        .as_deref()
        .map(|s| {
            PackageType::parse(s)
                .ok_or_else(|| AppError::Validation(format!("unknown package type: {s}")))
        })
        .transpose()?;

    // With a duration the end is exactly start + duration_hours; without one
    // the booking is a point-in-time event and carries no end. Values too
    // large to represent are rejected here, not panicked on downstream.
    let booking_end_date = match req.duration_hours {
        Some(h) if h <= 0 => {
            return Err(AppError::Validation(
                "duration_hours must be positive".to_string(),
            ));
        }
        Some(h) => {
            let span = Duration::try_hours(h).ok_or_else(|| {
                AppError::Validation("duration_hours is out of range".to_string())
            })?;
            let end = req.booking_date.checked_add_signed(span).ok_or_else(|| {
                AppError::Validation("duration_hours is out of range".to_string())
            })?;
            Some(end)
        }
        None => None,
    };

    Ok(Booking {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        phone: req.phone,
        service_type,
        pickup_location: req.pickup_location,
        dropoff_location: req.dropoff_location,
        booking_date: req.booking_date,
        booking_end_date,
        duration_hours: req.duration_hours,
        package_type,
        message: req.message,
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    })
}

/// Validates, persists, then requests customer + business notifications.
/// The insert is the success criterion; a dead mailer only shows up in the
/// logs.
pub async fn create_booking(state: &AppState, req: BookingRequest) -> Result<Booking, AppError> {
    let booking = validate(req)?;

    {
        let db = state.db.lock().unwrap();
        queries::insert_booking(&db, &booking)?;
    }
    tracing::info!(booking_id = %booking.id, service = booking.service_type.as_str(), "booking created");

    notify::best_effort(
        "booking confirmation",
        state.notifier.send_booking_confirmation(&booking),
    )
    .await;
    notify::best_effort("booking alert", state.notifier.send_booking_alert(&booking)).await;

    Ok(booking)
}

/// Overlap hint list for calendar rendering: every non-cancelled booking
/// whose start falls in `[range_start, range_end]` inclusive. Bookings that
/// begin before the range but run into it are not reported; see the range
/// query in `db::queries`.
pub fn get_availability(
    state: &AppState,
    range_start: &DateTime<Utc>,
    range_end: &DateTime<Utc>,
) -> Result<Vec<BlockedSlot>, AppError> {
    let db = state.db.lock().unwrap();
    let bookings = queries::bookings_starting_between(&db, range_start, range_end)?;

    Ok(bookings
        .into_iter()
        .map(|b| BlockedSlot {
            end: b.booking_end_date.unwrap_or(b.booking_date),
            id: b.id,
            start: b.booking_date,
            service_type: b.service_type,
        })
        .collect())
}

pub fn list_bookings(state: &AppState) -> Result<Vec<Booking>, AppError> {
    let db = state.db.lock().unwrap();
    Ok(queries::list_bookings(&db)?)
}

/// Sets a booking's status in place. Unknown status values are rejected
/// before any read; a missing id is `NotFound`. Re-applying the current
/// status succeeds.
pub fn update_status(state: &AppState, id: &str, new_status: &str) -> Result<(), AppError> {
    let status = BookingStatus::parse(new_status)
        .ok_or_else(|| AppError::Validation(format!("invalid status: {new_status}")))?;

    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_booking_status(&db, id, &status)?
    };

    if !matched {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    tracing::info!(booking_id = id, status = status.as_str(), "booking status updated");
    Ok(())
}
