//! InMemoryAnimalStore - volatile store for testing and development.

use std::sync::{Arc, RwLock};

use super::{AnimalStore, Collection};
use crate::animal::{Animal, NewAnimal};
use crate::error::StoreError;

/// In-memory animal store with no backing file.
///
/// Clone-friendly via Arc; clones share the same working set.
#[derive(Clone, Default)]
pub struct InMemoryAnimalStore {
    collection: Arc<RwLock<Collection>>,
}

impl InMemoryAnimalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `animals`.
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        Self {
            collection: Arc::new(RwLock::new(Collection::new(animals, None))),
        }
    }
}

impl AnimalStore for InMemoryAnimalStore {
    fn all(&self) -> Result<Vec<Animal>, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(collection.animals.clone())
    }

    fn create(&self, animal: NewAnimal) -> Result<Animal, StoreError> {
        let mut collection = self
            .collection
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;
        collection.push(animal)
    }

    fn len(&self) -> Result<usize, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(collection.animals.len())
    }
}
