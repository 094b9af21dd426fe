use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use crate::auth::{is_admin, login_admin, logout_admin, verify_admin_password};
use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/admin/auth", post(login).get(status).delete(logout))
}

async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if verify_admin_password(&state.store, &body.password)? {
        login_admin(&session).await?;
        Ok(Json(json!({ "success": true })).into_response())
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid password" })),
        )
            .into_response())
    }
}

async fn status(session: Session) -> Result<Response, AppError> {
    if is_admin(&session).await? {
        Ok(Json(json!({ "authenticated": true })).into_response())
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "authenticated": false })),
        )
            .into_response())
    }
}

async fn logout(session: Session) -> Result<Json<serde_json::Value>, AppError> {
    logout_admin(&session).await?;
    Ok(Json(json!({ "success": true })))
}
