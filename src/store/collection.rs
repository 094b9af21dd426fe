use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::models::Record;

use super::StoreError;

/// One JSON-array file on disk, guarded by its own mutex so that the
/// read-modify-write cycle of each operation is serialized in-process.
///
/// Every operation loads the whole file, works on it in memory, and
/// rewrites the whole file before returning. Collections are small
/// (site content, not user data), so this stays cheap.
pub struct JsonCollection<T> {
    path: PathBuf,
    seed: fn() -> Vec<T>,
    lock: Mutex<()>,
}

impl<T> JsonCollection<T>
where
    T: Record + Serialize + DeserializeOwned + Clone,
{
    pub(super) fn new(path: PathBuf, seed: fn() -> Vec<T>) -> Self {
        Self {
            path,
            seed,
            lock: Mutex::new(()),
        }
    }

    /// All records in file order. A missing file is created with the seed
    /// set; a corrupt file falls back to the seed set without persisting it.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_or_seed()
    }

    /// Append a record and return it.
    pub fn append(&self, record: T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read_or_seed()?;
        records.push(record.clone());
        self.write(&records)?;
        Ok(record)
    }

    /// Insert a record at the front, newest first.
    pub fn prepend(&self, record: T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read_or_seed()?;
        records.insert(0, record.clone());
        self.write(&records)?;
        Ok(record)
    }

    /// Apply `mutate` to the record with the given id and rewrite the file.
    /// Returns the updated record, or `None` when the id is absent (in which
    /// case the file is left untouched).
    pub fn update_with(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut T),
    ) -> Result<Option<T>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read_or_seed()?;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        mutate(record);
        let updated = record.clone();

        self.write(&records)?;
        Ok(Some(updated))
    }

    /// Remove the record with the given id. Returns whether anything was
    /// removed; deleting an already-absent id reports `false` and does not
    /// rewrite the file.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let records = self.read_or_seed()?;

        let remaining: Vec<T> = records.iter().filter(|r| r.id() != id).cloned().collect();
        if remaining.len() == records.len() {
            return Ok(false);
        }

        self.write(&remaining)?;
        Ok(true)
    }

    fn read_or_seed(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let seeded = (self.seed)();
                self.write(&seeded)?;
                return Ok(seeded);
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    "Corrupt collection file {}, falling back to seed data: {e}",
                    self.path.display()
                );
                Ok((self.seed)())
            }
        }
    }

    // Write to a sibling temp file and rename over the target, so a crash
    // mid-write never leaves a truncated collection behind.
    fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(StoreError::Json)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(StoreError::Io)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Io)?;
        Ok(())
    }
}
