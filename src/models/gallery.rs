use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// Gallery images are append/delete only; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: Option<String>,
}

impl GalleryItem {
    pub fn new(input: NewGalleryItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            category: input.category,
            image: input.image,
            description: input.description,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl Record for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }
}
