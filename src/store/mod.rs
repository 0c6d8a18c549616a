//! Animal stores - the working set of records and its single write path.
//!
//! A store owns the collection behind its own lock. Reads hand out copies;
//! [`AnimalStore::create`] assigns the id, persists and appends while holding
//! the lock, so no reader ever sees a record that failed to persist.
//!
//! ## Example
//!
//! ```ignore
//! use zookeepr::store::{AnimalStore, JsonFileStore};
//!
//! let store = JsonFileStore::open("data/animals.json")?;
//! let created = store.create(new_animal)?;
//! let again = store.get(&created.id)?;
//! ```

mod in_memory;
mod json_file;

use crate::animal::{filter_by_query, find_by_id, Animal, AnimalQuery, NewAnimal};
use crate::error::StoreError;

pub use in_memory::InMemoryAnimalStore;
pub use json_file::JsonFileStore;

/// Storage for the animal working set.
pub trait AnimalStore: Send + Sync {
    /// Snapshot of every record, in insertion order.
    fn all(&self) -> Result<Vec<Animal>, StoreError>;

    /// Assign an id to `animal`, append it and persist the collection.
    fn create(&self, animal: NewAnimal) -> Result<Animal, StoreError>;

    /// Records matching `query`, in insertion order.
    fn find(&self, query: &AnimalQuery) -> Result<Vec<Animal>, StoreError> {
        Ok(filter_by_query(query, &self.all()?))
    }

    /// The record with the given id, if any.
    fn get(&self, id: &str) -> Result<Option<Animal>, StoreError> {
        Ok(find_by_id(id, &self.all()?).cloned())
    }

    /// Number of records in the working set.
    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Records plus the id counter, guarded together by each store.
#[derive(Debug, Clone, Default)]
pub(crate) struct Collection {
    pub(crate) animals: Vec<Animal>,
    pub(crate) next_id: u64,
}

impl Collection {
    /// Build a collection, deriving the counter when none was persisted.
    pub(crate) fn new(animals: Vec<Animal>, next_id: Option<u64>) -> Self {
        let derived = derive_next_id(&animals);
        Self {
            next_id: next_id.map_or(derived, |n| n.max(derived)),
            animals,
        }
    }

    /// Append `animal` under the next id and advance the counter.
    ///
    /// `u64::MAX` is never handed out; reaching it leaves the collection
    /// untouched and returns [`StoreError::IdsExhausted`].
    pub(crate) fn push(&mut self, animal: NewAnimal) -> Result<Animal, StoreError> {
        let advanced = self
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        let animal = animal.into_animal(self.next_id.to_string());
        self.next_id = advanced;
        self.animals.push(animal.clone());
        Ok(animal)
    }

    /// Undo the last [`Collection::push`].
    pub(crate) fn rollback(&mut self) {
        if self.animals.pop().is_some() {
            self.next_id -= 1;
        }
    }
}

/// One past the largest numeric id, and never below the record count.
///
/// An id of `u64::MAX` cannot collide with a counter id, so it is skipped.
fn derive_next_id(animals: &[Animal]) -> u64 {
    let past_max = animals
        .iter()
        .filter_map(|a| a.id.parse::<u64>().ok())
        .filter_map(|id| id.checked_add(1))
        .max()
        .unwrap_or(0);
    past_max.max(animals.len() as u64)
}
