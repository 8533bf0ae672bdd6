use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ContactEntry, ContactRequest};
use crate::services::contacts;
use crate::state::AppState;

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactEntry>, AppError> {
    let contact = contacts::create_contact(&state, req).await?;
    Ok(Json(contact))
}
