use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::models::{GalleryItem, NewGalleryItem};
use crate::AppState;

use super::require;

// No update route: gallery images are replaced by delete-and-recreate.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gallery", get(list_gallery))
        .route("/api/admin/gallery", get(list_gallery).post(create_item))
        .route("/api/admin/gallery/{id}", delete(delete_item))
}

async fn list_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, AppError> {
    Ok(Json(state.store.gallery().list()?))
}

async fn create_item(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<NewGalleryItem>,
) -> Result<(StatusCode, Json<GalleryItem>), AppError> {
    require("title", &input.title)?;
    require("category", &input.category)?;
    require("image", &input.image)?;

    let item = state.store.gallery().append(GalleryItem::new(input))?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_item(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.store.gallery().delete(&id)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Gallery item"))
    }
}
