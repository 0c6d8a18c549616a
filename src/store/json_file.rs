//! JsonFileStore - working set loaded from, and flushed to, one JSON file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{AnimalStore, Collection};
use crate::animal::{Animal, NewAnimal};
use crate::error::StoreError;

/// On-disk layout, as read.
#[derive(Deserialize)]
struct AnimalFile {
    #[serde(default)]
    animals: Vec<Animal>,
    #[serde(rename = "nextId", default)]
    next_id: Option<u64>,
}

/// On-disk layout, as written.
#[derive(Serialize)]
struct AnimalFileRef<'a> {
    animals: &'a [Animal],
    #[serde(rename = "nextId")]
    next_id: u64,
}

/// File-backed animal store.
///
/// The file is read once by [`JsonFileStore::open`]; every create rewrites
/// it in full as `{ "animals": [...], "nextId": n }` with 2-space indents.
pub struct JsonFileStore {
    path: PathBuf,
    collection: Mutex<Collection>,
}

impl JsonFileStore {
    /// Load the working set from `path`. A missing file is an empty set.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let collection = match std::fs::read_to_string(&path) {
            Ok(text) => {
                let file: AnimalFile = serde_json::from_str(&text)?;
                Collection::new(file.animals, file.next_id)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "animal file not found, starting empty");
                Collection::default()
            }
            Err(err) => return Err(StoreError::io(&path, err)),
        };

        info!(
            path = %path.display(),
            animals = collection.animals.len(),
            next_id = collection.next_id,
            "animal store loaded"
        );

        Ok(Self {
            path,
            collection: Mutex::new(collection),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, collection: &Collection) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(&AnimalFileRef {
            animals: &collection.animals,
            next_id: collection.next_id,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        std::fs::write(&self.path, body).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), animals = collection.animals.len(), "animal file written");
        Ok(())
    }
}

impl AnimalStore for JsonFileStore {
    fn all(&self) -> Result<Vec<Animal>, StoreError> {
        let collection = self
            .collection
            .lock()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(collection.animals.clone())
    }

    fn create(&self, animal: NewAnimal) -> Result<Animal, StoreError> {
        let mut collection = self
            .collection
            .lock()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let created = collection.push(animal)?;
        if let Err(err) = self.persist(&collection) {
            collection.rollback();
            error!(id = %created.id, error = %err, "failed to persist new animal");
            return Err(err);
        }

        info!(id = %created.id, name = %created.name, "animal created");
        Ok(created)
    }

    fn len(&self) -> Result<usize, StoreError> {
        let collection = self
            .collection
            .lock()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(collection.animals.len())
    }
}
