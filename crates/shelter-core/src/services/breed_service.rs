//! Breed service - orchestrates breed lookups and inserts.

use std::sync::Arc;

use crate::domain::{Breed, NewBreed};
use crate::ports::{BreedRepository, CoreError, RepositoryError};

/// Service for breed operations.
pub struct BreedService {
    repo: Arc<dyn BreedRepository>,
}

impl BreedService {
    /// Create a new breed service with the given repository.
    pub fn new(repo: Arc<dyn BreedRepository>) -> Self {
        Self { repo }
    }

    /// List all breeds.
    pub async fn list(&self) -> Result<Vec<Breed>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Add a breed. The name is trimmed and must not be blank.
    pub async fn add(&self, name: &str, description: Option<String>) -> Result<Breed, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("Breed name cannot be empty".to_string()));
        }
        let breed = NewBreed {
            name: name.to_string(),
            description,
        };
        self.repo.insert(&breed).await.map_err(CoreError::from)
    }

    /// Look a breed up by name, creating it when it doesn't exist yet.
    pub async fn find_or_create(&self, name: &str) -> Result<Breed, CoreError> {
        match self.repo.get_by_name(name.trim()).await {
            Ok(breed) => Ok(breed),
            Err(RepositoryError::NotFound(_)) => {
                tracing::debug!(breed = name, "Creating missing breed");
                self.add(name, None).await
            }
            Err(e) => Err(CoreError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockBreedRepository;

    fn breed(id: i64, name: &str) -> Breed {
        Breed {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name() {
        let repo = MockBreedRepository::new();
        let service = BreedService::new(Arc::new(repo));

        let err = service.add("   ", None).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_find_or_create_returns_existing() {
        let mut repo = MockBreedRepository::new();
        repo.expect_get_by_name()
            .withf(|name: &str| name == "Labrador")
            .returning(|name| Ok(breed(1, name)));
        repo.expect_insert().never();

        let service = BreedService::new(Arc::new(repo));
        let found = service.find_or_create("Labrador").await.unwrap();
        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn test_find_or_create_inserts_missing() {
        let mut repo = MockBreedRepository::new();
        repo.expect_get_by_name()
            .returning(|name| Err(RepositoryError::NotFound(format!("Breed '{name}'"))));
        repo.expect_insert()
            .times(1)
            .withf(|new_breed: &NewBreed| new_breed.name == "Beagle")
            .returning(|new_breed| Ok(breed(9, &new_breed.name)));

        let service = BreedService::new(Arc::new(repo));
        let created = service.find_or_create(" Beagle ").await.unwrap();
        assert_eq!(created.id, 9);
        assert_eq!(created.name, "Beagle");
    }
}
