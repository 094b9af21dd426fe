use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::models::{NewTestimonial, Testimonial, TestimonialPatch};
use crate::AppState;

use super::require;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/testimonials", get(list_testimonials))
        .route(
            "/api/admin/testimonials",
            get(list_testimonials).post(create_testimonial),
        )
        .route(
            "/api/admin/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
}

fn check_rating(rating: u8) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(state.store.testimonials().list()?))
}

async fn create_testimonial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<NewTestimonial>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    require("name", &input.name)?;
    require("content", &input.content)?;
    check_rating(input.rating)?;

    let testimonial = state
        .store
        .testimonials()
        .append(Testimonial::new(input))?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

async fn update_testimonial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TestimonialPatch>,
) -> Result<Json<Testimonial>, AppError> {
    if let Some(rating) = patch.rating {
        check_rating(rating)?;
    }

    state
        .store
        .testimonials()
        .update_with(&id, |testimonial| testimonial.apply(patch))?
        .map(Json)
        .ok_or(AppError::NotFound("Testimonial"))
}

async fn delete_testimonial(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.store.testimonials().delete(&id)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::NotFound("Testimonial"))
    }
}
