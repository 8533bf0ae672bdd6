//! Contact record manager. Same storage and notification contract as the
//! booking manager, minus any time-range semantics.

use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{is_well_formed_email, ContactEntry, ContactRequest, ContactStatus};
use crate::services::notify;
use crate::state::AppState;

fn validate(req: ContactRequest) -> Result<ContactEntry, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if !is_well_formed_email(&req.email) {
        return Err(AppError::Validation("email is not well-formed".to_string()));
    }
    if req.service.trim().is_empty() {
        return Err(AppError::Validation("service is required".to_string()));
    }

    Ok(ContactEntry {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        phone: req.phone,
        service: req.service,
        message: req.message,
        status: ContactStatus::New,
        created_at: Utc::now(),
    })
}

pub async fn create_contact(state: &AppState, req: ContactRequest) -> Result<ContactEntry, AppError> {
    let contact = validate(req)?;

    {
        let db = state.db.lock().unwrap();
        queries::insert_contact(&db, &contact)?;
    }
    tracing::info!(contact_id = %contact.id, service = %contact.service, "contact entry created");

    notify::best_effort("contact alert", state.notifier.send_contact_alert(&contact)).await;

    Ok(contact)
}

pub fn list_contacts(state: &AppState) -> Result<Vec<ContactEntry>, AppError> {
    let db = state.db.lock().unwrap();
    Ok(queries::list_contacts(&db)?)
}
