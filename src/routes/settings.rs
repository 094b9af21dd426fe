use axum::{extract::State, routing::put, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{set_admin_password, verify_admin_password, AdminSession};
use crate::error::AppError;
use crate::AppState;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    current_password: String,
    #[serde(default)]
    new_password: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/admin/settings/password", put(change_password))
}

async fn change_password(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<Value>, AppError> {
    if body.current_password.is_empty() || body.new_password.is_empty() {
        return Err(AppError::Validation(
            "Current and new passwords are required".to_string(),
        ));
    }

    if !verify_admin_password(&state.store, &body.current_password)? {
        return Err(AppError::Validation(
            "Current password is incorrect".to_string(),
        ));
    }

    if body.new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "New password must be at least 8 characters".to_string(),
        ));
    }

    set_admin_password(&state.store, &body.new_password)?;
    Ok(Json(json!({ "success": true })))
}
