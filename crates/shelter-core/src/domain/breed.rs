//! Breed domain types.

use serde::{Deserialize, Serialize};

/// A persisted breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Database ID of the breed.
    pub id: i64,
    /// Unique breed name (e.g., "Labrador").
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// A breed to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBreed {
    pub name: String,
    pub description: Option<String>,
}

impl NewBreed {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The slice of a breed a dog carries once the relation is resolved.
///
/// A dog only references its breed; it never owns the breed's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRef {
    pub id: i64,
    pub name: String,
}

impl From<&Breed> for BreedRef {
    fn from(breed: &Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name.clone(),
        }
    }
}
