use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::models::{ContactSubmission, NewContactSubmission};
use crate::AppState;

use super::require;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/admin/contacts", get(list_contacts))
        .route("/api/admin/contacts/{id}/read", put(mark_read))
        .route("/api/admin/contacts/{id}", delete(delete_contact))
}

fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Public contact form. Submissions land newest-first so the admin inbox
/// reads top-down.
async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<NewContactSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require("name", &input.name)?;
    require("email", &input.email)?;
    require("message", &input.message)?;

    if !valid_email(&input.email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    state
        .store
        .contacts()
        .prepend(ContactSubmission::new(input))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Thank you for your message. We will get back to you soon!",
        })),
    ))
}

async fn list_contacts(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    Ok(Json(state.store.contacts().list()?))
}

async fn mark_read(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .contacts()
        .update_with(&id, |contact| contact.read = true)?
        .map(|_| Json(json!({ "success": true })))
        .ok_or(AppError::NotFound("Contact"))
}

async fn delete_contact(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.store.contacts().delete(&id)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Contact"))
    }
}
