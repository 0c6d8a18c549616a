//! Animal records and the pure operations over them.
//!
//! Everything in this module is free of I/O: filtering, lookup and
//! validation work on plain slices and JSON values so they can be used by
//! any store implementation and tested without a server.
//!
//! ## Example
//!
//! ```ignore
//! use zookeepr::animal::{filter_by_query, find_by_id, AnimalQuery};
//!
//! let query = AnimalQuery::from_pairs([("species", "bear"), ("personalityTraits", "hungry")]);
//! let bears = filter_by_query(&query, &animals);
//! let first = find_by_id("0", &animals);
//! ```

mod query;
mod validate;

use serde::{Deserialize, Serialize};

pub use query::{filter_by_query, AnimalQuery};
pub use validate::{validate_animal, NewAnimal, INVALID_ANIMAL_MESSAGE};

/// A stored animal record.
///
/// Field order here is the field order of the persisted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    #[serde(default)]
    pub personality_traits: Vec<String>,
}

impl Animal {
    /// Returns true if the record carries `trait_name` verbatim.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}

/// Return the first record whose id equals `id`.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}
