//! Admin gateway: every handler here calls [`require_admin`] before touching
//! storage, except `login` which mints the token in the first place.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, ContactEntry, ContactStatus};
use crate::services::{bookings, contacts};
use crate::state::AppState;

/// Verifies the bearer token on the request. Rejections are logged with the
/// reason but surfaced as a bare 401 either way.
fn require_admin(headers: &HeaderMap, state: &AppState) -> Result<Claims, AppError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth_header.strip_prefix("Bearer ").unwrap_or("");

    auth::verify_token(&state.config.session_secret, token).map_err(|e| {
        tracing::warn!(reason = %e, "admin token rejected");
        AppError::Unauthorized
    })
}

// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !auth::authenticate(&state.config, &body.username, &body.password) {
        tracing::warn!(username = %body.username, "failed admin login");
        return Err(AppError::Unauthorized);
    }

    let token = auth::issue_token(
        &state.config.session_secret,
        &body.username,
        auth::ADMIN_ROLE,
        Duration::minutes(state.config.session_ttl_minutes),
    );

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer",
    }))
}

// GET /api/admin/verify
pub async fn verify(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = require_admin(&headers, &state)?;
    Ok(Json(serde_json::json!({"valid": true, "username": claims.sub})))
}

// GET /api/admin/bookings
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    require_admin(&headers, &state)?;
    Ok(Json(bookings::list_bookings(&state)?))
}

// GET /api/admin/contacts
pub async fn get_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactEntry>>, AppError> {
    require_admin(&headers, &state)?;
    Ok(Json(contacts::list_contacts(&state)?))
}

// PUT /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&headers, &state)?;
    bookings::update_status(&state, &id, &body.status)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// GET /api/admin/stats
#[derive(Serialize)]
pub struct StatsResponse {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub total_contacts: i64,
    pub new_contacts: i64,
}

/// Derived read; counts are recomputed from storage on every call.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    require_admin(&headers, &state)?;

    let db = state.db.lock().unwrap();
    Ok(Json(StatsResponse {
        total_bookings: queries::count_bookings(&db, None)?,
        pending_bookings: queries::count_bookings(&db, Some(&BookingStatus::Pending))?,
        confirmed_bookings: queries::count_bookings(&db, Some(&BookingStatus::Confirmed))?,
        completed_bookings: queries::count_bookings(&db, Some(&BookingStatus::Completed))?,
        total_contacts: queries::count_contacts(&db, None)?,
        new_contacts: queries::count_contacts(&db, Some(&ContactStatus::New))?,
    }))
}
