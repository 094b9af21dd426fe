use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commercial {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub thumbnail: String,
    pub video_url: String,
    pub description: String,
    /// Display duration, e.g. "0:60".
    pub duration: String,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommercial {
    pub title: String,
    pub category: String,
    pub client: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub featured: Option<bool>,
}

impl Commercial {
    pub fn new(input: NewCommercial) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            category: input.category,
            client: input.client,
            thumbnail: input.thumbnail,
            video_url: input.video_url,
            description: input.description,
            duration: input.duration,
            featured: input.featured,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: CommercialPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now().to_rfc3339();
    }
}

impl Record for Commercial {
    fn id(&self) -> &str {
        &self.id
    }
}
