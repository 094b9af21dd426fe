use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::models::{Event, EventPatch, NewEvent};
use crate::AppState;

use super::require;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/admin/events", get(list_events).post(create_event))
        .route(
            "/api/admin/events/{id}",
            put(update_event).delete(delete_event),
        )
}

async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store.events().list()?))
}

async fn create_event(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    require("title", &input.title)?;
    require("category", &input.category)?;
    require("date", &input.date)?;
    require("location", &input.location)?;

    let event = state.store.events().append(Event::new(input))?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn update_event(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, AppError> {
    state
        .store
        .events()
        .update_with(&id, |event| event.apply(patch))?
        .map(Json)
        .ok_or(AppError::NotFound("Event"))
}

async fn delete_event(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.store.events().delete(&id)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Event"))
    }
}
