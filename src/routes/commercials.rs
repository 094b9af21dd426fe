use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::models::{Commercial, CommercialPatch, NewCommercial};
use crate::AppState;

use super::require;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/commercials", get(list_commercials))
        .route(
            "/api/admin/commercials",
            get(list_commercials).post(create_commercial),
        )
        .route(
            "/api/admin/commercials/{id}",
            put(update_commercial).delete(delete_commercial),
        )
}

async fn list_commercials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Commercial>>, AppError> {
    Ok(Json(state.store.commercials().list()?))
}

async fn create_commercial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<NewCommercial>,
) -> Result<(StatusCode, Json<Commercial>), AppError> {
    require("title", &input.title)?;
    require("category", &input.category)?;
    require("client", &input.client)?;

    let commercial = state.store.commercials().append(Commercial::new(input))?;
    Ok((StatusCode::CREATED, Json(commercial)))
}

async fn update_commercial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CommercialPatch>,
) -> Result<Json<Commercial>, AppError> {
    state
        .store
        .commercials()
        .update_with(&id, |commercial| commercial.apply(patch))?
        .map(Json)
        .ok_or(AppError::NotFound("Commercial"))
}

async fn delete_commercial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.store.commercials().delete(&id)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Commercial"))
    }
}
