//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod breed_repository;
pub mod dog_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::DogValidationError;

// Re-export repository traits for convenience
pub use breed_repository::BreedRepository;
pub use dog_repository::DogRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use breed_repository::MockBreedRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use dog_repository::MockDogRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in `shelter-core`
/// so that `AppCore` can accept it without depending on `shelter-db`.
///
/// # Example
///
/// ```ignore
/// // In shelter-db factory:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = shelter_db::CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Dog repository.
    pub dogs: Arc<dyn DogRepository>,
    /// Breed repository.
    pub breeds: Arc<dyn BreedRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(dogs: Arc<dyn DogRepository>, breeds: Arc<dyn BreedRepository>) -> Self {
        Self { dogs, breeds }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row could not be turned back into a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// An attribute value violated a dog invariant.
    #[error(transparent)]
    InvalidAttribute(#[from] DogValidationError),

    /// Validation error (invalid input outside the dog attributes).
    #[error("Validation error: {0}")]
    Validation(String),
}
