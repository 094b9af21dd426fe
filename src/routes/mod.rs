pub mod auth;
pub mod commercials;
pub mod contacts;
pub mod events;
pub mod gallery;
pub mod settings;
pub mod stats;
pub mod testimonials;

use crate::error::AppError;

/// Presence check for required string fields.
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}
