use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub featured_events: usize,
    pub total_commercials: usize,
    pub total_gallery_items: usize,
    pub total_testimonials: usize,
    pub total_contacts: usize,
    pub unread_contacts: usize,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/admin/stats", get(dashboard_stats))
}

async fn dashboard_stats(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let events = state.store.events().list()?;
    let commercials = state.store.commercials().list()?;
    let gallery = state.store.gallery().list()?;
    let testimonials = state.store.testimonials().list()?;
    let contacts = state.store.contacts().list()?;

    Ok(Json(DashboardStats {
        featured_events: events.iter().filter(|e| e.featured).count(),
        total_events: events.len(),
        total_commercials: commercials.len(),
        total_gallery_items: gallery.len(),
        total_testimonials: testimonials.len(),
        unread_contacts: contacts.iter().filter(|c| !c.read).count(),
        total_contacts: contacts.len(),
    }))
}
