//! Dog service - orchestrates dog reads and inserts.

use std::sync::Arc;

use crate::domain::{Dog, DogRecord, NewDog};
use crate::ports::{CoreError, DogRepository, RepositoryError};

/// Service for dog operations.
///
/// A thin facade over the injected `DogRepository`; the only logic it adds
/// is mapping dogs through their serialization method.
pub struct DogService {
    repo: Arc<dyn DogRepository>,
}

impl DogService {
    /// Create a new dog service with the given repository.
    pub fn new(repo: Arc<dyn DogRepository>) -> Self {
        Self { repo }
    }

    /// List all dogs with their breed resolved.
    pub async fn list(&self) -> Result<Vec<Dog>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// List all dogs as transport records, in repository order.
    pub async fn list_records(&self) -> Result<Vec<DogRecord>, CoreError> {
        let dogs = self.list().await?;
        tracing::debug!(count = dogs.len(), "Listing dogs");
        Ok(dogs.iter().map(Dog::to_dict).collect())
    }

    /// Get a dog by its database ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Dog>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(dog) => Ok(Some(dog)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Add a new dog. The dog was validated when it was constructed.
    ///
    /// A breed named by the dog must already exist.
    pub async fn add(&self, dog: NewDog) -> Result<Dog, CoreError> {
        let dog = match self.repo.insert(&dog).await {
            Ok(dog) => dog,
            Err(RepositoryError::NotFound(what)) if dog.breed().is_some() => {
                return Err(CoreError::Validation(format!("Unknown breed: {what}")));
            }
            Err(e) => return Err(CoreError::from(e)),
        };
        tracing::info!(dog_id = dog.id(), name = dog.name(), "Dog added");
        Ok(dog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BreedRef, DogRow, UNKNOWN_STATUS};
    use crate::ports::MockDogRepository;
    use chrono::Utc;

    fn dog(id: i64, name: &str, breed: Option<&str>) -> Dog {
        Dog::try_from(DogRow {
            id,
            name: name.to_string(),
            breed: breed.map(|b| BreedRef {
                id: id * 10,
                name: b.to_string(),
            }),
            age: 3,
            gender: "Male".to_string(),
            description: None,
            status: Some("AVAILABLE".to_string()),
            intake_date: Utc::now(),
            adoption_date: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_records_maps_every_dog_in_order() {
        let mut repo = MockDogRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                dog(1, "Buddy", Some("Labrador")),
                dog(2, "Max", Some("German Shepherd")),
            ])
        });

        let service = DogService::new(Arc::new(repo));
        let records = service.list_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Buddy");
        assert_eq!(records[0].breed.as_deref(), Some("Labrador"));
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].name, "Max");
        assert_eq!(records[1].breed.as_deref(), Some("German Shepherd"));
    }

    #[tokio::test]
    async fn test_list_records_empty() {
        let mut repo = MockDogRepository::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let service = DogService::new(Arc::new(repo));
        assert!(service.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_records_propagates_storage_errors() {
        let mut repo = MockDogRepository::new();
        repo.expect_list()
            .returning(|| Err(RepositoryError::Storage("disk full".to_string())));

        let service = DogService::new(Arc::new(repo));
        let err = service.list_records().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_get_by_id_maps_not_found_to_none() {
        let mut repo = MockDogRepository::new();
        repo.expect_get_by_id()
            .withf(|id| *id == 7)
            .returning(|id| Err(RepositoryError::NotFound(format!("Dog with ID {id}"))));

        let service = DogService::new(Arc::new(repo));
        assert!(service.get_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_returns_persisted_dog() {
        let mut repo = MockDogRepository::new();
        repo.expect_insert()
            .withf(|new_dog| new_dog.name() == "Luna" && new_dog.breed().is_none())
            .returning(|new_dog| Ok(dog(5, new_dog.name(), None)));

        let service = DogService::new(Arc::new(repo));
        let new_dog = NewDog::new("Luna", 2, "Female").unwrap();
        let added = service.add(new_dog).await.unwrap();

        assert_eq!(added.id(), 5);
        assert_eq!(added.to_dict().breed, None);
        assert_ne!(added.to_dict().status, UNKNOWN_STATUS);
    }

    #[tokio::test]
    async fn test_add_with_unknown_breed_is_validation_error() {
        let mut repo = MockDogRepository::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::NotFound("Breed 'Dragon'".to_string())));

        let service = DogService::new(Arc::new(repo));
        let new_dog = NewDog::new("Rex", 4, "Male")
            .unwrap()
            .with_breed("Dragon")
            .unwrap();
        let err = service.add(new_dog).await.unwrap_err();

        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("Dragon")));
    }
}
