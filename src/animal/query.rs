//! List criteria and the filter that applies them.

use super::Animal;

/// Criteria accepted by the list endpoint. Every dimension is optional and
/// all present dimensions must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    /// Every listed trait must appear on the record.
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from decoded query-string pairs.
    ///
    /// `personalityTraits` may repeat (or use the `personalityTraits[]` form)
    /// and accumulates; the other keys keep their last value. Empty values
    /// and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "personalityTraits" | "personalityTraits[]" => query.personality_traits.push(value),
                "diet" => query.diet = Some(value),
                "species" => query.species = Some(value),
                "name" => query.name = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }

    /// Check a single record against every present criterion.
    pub fn matches(&self, animal: &Animal) -> bool {
        fn field_matches(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |e| e == actual)
        }

        self.personality_traits.iter().all(|t| animal.has_trait(t))
            && field_matches(&self.diet, &animal.diet)
            && field_matches(&self.species, &animal.species)
            && field_matches(&self.name, &animal.name)
    }
}

/// Return the records matching `query`, in their original order.
pub fn filter_by_query(query: &AnimalQuery, animals: &[Animal]) -> Vec<Animal> {
    if query.is_empty() {
        return animals.to_vec();
    }
    animals
        .iter()
        .filter(|animal| query.matches(animal))
        .cloned()
        .collect()
}
