//! Dog repository trait definition.
//!
//! This port defines the interface for dog persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Dog, NewDog};

/// Repository for dog persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Read and insert only; dogs are never updated or deleted through here
/// - Every returned `Dog` has its breed relation already resolved
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// List all dogs, joined with their breed, in ascending ID order.
    ///
    /// Dogs without a breed are included.
    async fn list(&self) -> Result<Vec<Dog>, RepositoryError>;

    /// Get a dog by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the dog doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Dog, RepositoryError>;

    /// Insert a new dog.
    ///
    /// The breed, if any, is resolved by name. Returns
    /// `Err(RepositoryError::NotFound)` if the named breed doesn't exist.
    async fn insert(&self, dog: &NewDog) -> Result<Dog, RepositoryError>;
}
