use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    pub image: Option<String>,
    pub rating: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub rating: Option<u8>,
}

impl Testimonial {
    pub fn new(input: NewTestimonial) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            role: input.role,
            company: input.company,
            content: input.content,
            image: input.image,
            rating: input.rating,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn apply(&mut self, patch: TestimonialPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

impl Record for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }
}
