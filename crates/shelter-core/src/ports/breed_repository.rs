//! Breed repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Breed, NewBreed};

/// Repository for breed persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// List all breeds ordered by name.
    async fn list(&self) -> Result<Vec<Breed>, RepositoryError>;

    /// Get a breed by its exact name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no breed has that name.
    async fn get_by_name(&self, name: &str) -> Result<Breed, RepositoryError>;

    /// Insert a new breed.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(&self, breed: &NewBreed) -> Result<Breed, RepositoryError>;
}
