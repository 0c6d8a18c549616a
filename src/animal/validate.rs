//! Structural validation of create payloads.

use serde::Deserialize;
use serde_json::Value;

use super::Animal;

/// Message returned to clients whose payload fails validation.
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";

/// Check that `candidate` has non-empty string `name`, `species` and `diet`
/// fields and an array `personalityTraits`. Any `id` is ignored.
pub fn validate_animal(candidate: &Value) -> bool {
    let non_empty_string =
        |field: &str| matches!(candidate.get(field), Some(Value::String(s)) if !s.is_empty());

    non_empty_string("name")
        && non_empty_string("species")
        && non_empty_string("diet")
        && matches!(candidate.get("personalityTraits"), Some(Value::Array(_)))
}

/// A validated create payload, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl NewAnimal {
    /// Validate and decode a raw payload. Unknown fields, including a
    /// client-supplied `id`, are dropped.
    pub fn from_value(candidate: Value) -> Result<Self, String> {
        if !validate_animal(&candidate) {
            return Err(INVALID_ANIMAL_MESSAGE.to_string());
        }
        // Trait entries that are not strings only surface here.
        serde_json::from_value(candidate).map_err(|_| INVALID_ANIMAL_MESSAGE.to_string())
    }

    pub fn into_animal(self, id: String) -> Animal {
        Animal {
            id,
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
        }
    }
}
