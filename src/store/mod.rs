mod collection;
mod seeds;

pub use collection::JsonCollection;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::models::{Commercial, ContactSubmission, Event, GalleryItem, Testimonial};

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "io error: {e}"),
            StoreError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Singleton `config.json`. Overwritten wholesale; only ever holds the
/// bcrypt hash of the admin password, never the plaintext.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password_hash: Option<String>,
}

/// Flat-file content store: one pretty-printed JSON array per collection
/// under a single data directory, plus the `config.json` singleton.
///
/// Cloning is cheap; all clones share the per-collection locks.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

struct Inner {
    events: JsonCollection<Event>,
    commercials: JsonCollection<Commercial>,
    gallery: JsonCollection<GalleryItem>,
    testimonials: JsonCollection<Testimonial>,
    contacts: JsonCollection<ContactSubmission>,
    config_path: PathBuf,
    config_lock: Mutex<()>,
}

impl Store {
    /// Open (creating if necessary) the data directory.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(StoreError::Io)?;

        Ok(Self {
            inner: Arc::new(Inner {
                events: JsonCollection::new(dir.join("events.json"), seeds::events),
                commercials: JsonCollection::new(dir.join("commercials.json"), seeds::commercials),
                gallery: JsonCollection::new(dir.join("gallery.json"), seeds::gallery),
                testimonials: JsonCollection::new(
                    dir.join("testimonials.json"),
                    seeds::testimonials,
                ),
                contacts: JsonCollection::new(dir.join("contacts.json"), seeds::contacts),
                config_path: dir.join("config.json"),
                config_lock: Mutex::new(()),
            }),
        })
    }

    pub fn events(&self) -> &JsonCollection<Event> {
        &self.inner.events
    }

    pub fn commercials(&self) -> &JsonCollection<Commercial> {
        &self.inner.commercials
    }

    pub fn gallery(&self) -> &JsonCollection<GalleryItem> {
        &self.inner.gallery
    }

    pub fn testimonials(&self) -> &JsonCollection<Testimonial> {
        &self.inner.testimonials
    }

    pub fn contacts(&self) -> &JsonCollection<ContactSubmission> {
        &self.inner.contacts
    }

    /// Read `config.json`. A missing or corrupt file yields the default
    /// (empty) config rather than an error.
    pub fn config(&self) -> SiteConfig {
        let _guard = self
            .inner
            .config_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match fs::read(&self.inner.config_path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    "Corrupt config file {}, starting fresh: {e}",
                    self.inner.config_path.display()
                );
                SiteConfig::default()
            }),
            Err(_) => SiteConfig::default(),
        }
    }

    pub fn save_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        let _guard = self
            .inner
            .config_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let json = serde_json::to_vec_pretty(config).map_err(StoreError::Json)?;
        let tmp = self.inner.config_path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(StoreError::Io)?;
        fs::rename(&tmp, &self.inner.config_path).map_err(StoreError::Io)?;
        Ok(())
    }
}
