pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// The full route table; `main` and the integration tests build the same app.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route(
            "/api/bookings/availability",
            get(handlers::bookings::get_availability),
        )
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/verify", get(handlers::admin::verify))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id/status",
            put(handlers::admin::update_booking_status),
        )
        .route("/api/admin/contacts", get(handlers::admin::get_contacts))
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .with_state(state)
}
