use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub category: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: Option<bool>,
}

impl Event {
    pub fn new(input: NewEvent) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            category: input.category,
            date: input.date,
            location: input.location,
            description: input.description,
            image: input.image,
            featured: input.featured,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now().to_rfc3339();
    }
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event::new(NewEvent {
            title: "Launch Gala".to_string(),
            category: "Corporate Events".to_string(),
            date: "2025-01-01".to_string(),
            location: "Colombo".to_string(),
            description: String::new(),
            image: String::new(),
            featured: false,
        })
    }

    #[test]
    fn new_event_gets_id_and_timestamps() {
        let event = sample();
        assert!(!event.id.is_empty());
        assert_eq!(event.created_at, event.updated_at);
    }

    #[test]
    fn patch_only_touches_named_fields() {
        let mut event = sample();
        let original_category = event.category.clone();

        event.apply(EventPatch {
            title: Some("Renamed Gala".to_string()),
            ..Default::default()
        });

        assert_eq!(event.title, "Renamed Gala");
        assert_eq!(event.category, original_category);
        assert_eq!(event.location, "Colombo");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
