//! zookeepr - a small REST API over a JSON-file-backed collection of animals.
//!
//! - [`animal`] holds the record type and the pure filter, lookup and
//!   validation functions.
//! - [`store`] owns the working set and its single create-and-persist path.
//! - [`api`] exposes both over HTTP (requires the `http` feature).

pub mod animal;
pub mod api;
pub mod config;
mod error;
pub mod store;

pub use animal::{filter_by_query, find_by_id, validate_animal, Animal, AnimalQuery, NewAnimal};
pub use api::ApiError;
pub use config::Config;
pub use error::StoreError;
pub use store::{AnimalStore, InMemoryAnimalStore, JsonFileStore};
