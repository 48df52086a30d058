//! `SQLite` implementation of the `DogRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use shelter_core::{Dog, DogRepository, NewDog, RepositoryError};

use super::row_mappers::{DOG_SELECT, format_datetime, row_to_dog};

/// `SQLite` implementation of the `DogRepository` trait.
pub struct SqliteDogRepository {
    pool: SqlitePool,
}

impl SqliteDogRepository {
    /// Create a new `SQLite` dog repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn resolve_breed_id(&self, breed: Option<&str>) -> Result<Option<i64>, RepositoryError> {
        let Some(name) = breed else {
            return Ok(None);
        };

        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM breeds WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        id.map(Some)
            .ok_or_else(|| RepositoryError::NotFound(format!("Breed '{name}'")))
    }
}

#[async_trait]
impl DogRepository for SqliteDogRepository {
    async fn list(&self) -> Result<Vec<Dog>, RepositoryError> {
        let query = format!("{DOG_SELECT} ORDER BY d.id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        tracing::debug!(rows = rows.len(), "Fetched dogs");
        rows.iter().map(row_to_dog).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Dog, RepositoryError> {
        let query = format!("{DOG_SELECT} WHERE d.id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Dog with ID {id}")))?;

        row_to_dog(&row)
    }

    async fn insert(&self, dog: &NewDog) -> Result<Dog, RepositoryError> {
        let breed_id = self.resolve_breed_id(dog.breed()).await?;

        let result = sqlx::query(
            r#"INSERT INTO dogs (
                name, breed_id, age, gender, description, status, intake_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(dog.name())
        .bind(breed_id)
        .bind(dog.age())
        .bind(dog.gender().as_str())
        .bind(dog.description())
        .bind(dog.status().name())
        .bind(format_datetime(&dog.intake_date()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteBreedRepository;
    use crate::setup::setup_test_database;
    use shelter_core::{AdoptionStatus, BreedRepository, NewBreed, UNKNOWN_STATUS};

    async fn repos() -> (SqliteDogRepository, SqliteBreedRepository, SqlitePool) {
        let pool = setup_test_database().await.unwrap();
        (
            SqliteDogRepository::new(pool.clone()),
            SqliteBreedRepository::new(pool.clone()),
            pool,
        )
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (dogs, _, _) = repos().await;
        assert!(dogs.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_list_with_breeds_in_id_order() {
        let (dogs, breeds, _) = repos().await;
        breeds.insert(&NewBreed::new("Labrador")).await.unwrap();
        breeds.insert(&NewBreed::new("German Shepherd")).await.unwrap();

        let buddy = NewDog::new("Buddy", 3, "Male")
            .unwrap()
            .with_breed("Labrador")
            .unwrap();
        let max = NewDog::new("Max", 5, "Male")
            .unwrap()
            .with_breed("German Shepherd")
            .unwrap();
        dogs.insert(&buddy).await.unwrap();
        dogs.insert(&max).await.unwrap();

        let listed = dogs.list().await.unwrap();
        let records: Vec<_> = listed.iter().map(Dog::to_dict).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Buddy");
        assert_eq!(records[0].breed.as_deref(), Some("Labrador"));
        assert_eq!(records[1].name, "Max");
        assert_eq!(records[1].breed.as_deref(), Some("German Shepherd"));
        assert!(records[0].id < records[1].id);
    }

    #[tokio::test]
    async fn test_dogs_without_breed_are_listed() {
        let (dogs, _, _) = repos().await;
        let luna = NewDog::new("Luna", 1, "Female")
            .unwrap()
            .with_description("Shy at first, then a cuddle monster")
            .unwrap();
        let inserted = dogs.insert(&luna).await.unwrap();

        assert_eq!(inserted.breed(), None);
        assert_eq!(inserted.status(), Some(AdoptionStatus::Available));
        assert_eq!(
            inserted.description(),
            Some("Shy at first, then a cuddle monster")
        );
        assert_eq!(dogs.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_with_unknown_breed_is_not_found() {
        let (dogs, _, pool) = repos().await;
        let dog = NewDog::new("Rex", 4, "Male")
            .unwrap()
            .with_breed("Dragon")
            .unwrap();

        let err = dogs.insert(&dog).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dogs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_status_round_trips_by_symbolic_name() {
        let (dogs, _, pool) = repos().await;
        let dog = NewDog::new("Pip", 2, "Unknown")
            .unwrap()
            .with_status(AdoptionStatus::Pending);
        let inserted = dogs.insert(&dog).await.unwrap();

        let (stored,): (String,) = sqlx::query_as("SELECT status FROM dogs WHERE id = ?")
            .bind(inserted.id())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, "PENDING");
        assert_eq!(inserted.status(), Some(AdoptionStatus::Pending));
    }

    #[tokio::test]
    async fn test_null_status_reads_as_unknown() {
        let (dogs, _, pool) = repos().await;
        sqlx::query(
            "INSERT INTO dogs (name, age, gender, status, intake_date) VALUES ('Ghost', 4, 'Male', NULL, '2024-01-01 00:00:00 UTC')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let listed = dogs.list().await.unwrap();
        assert_eq!(listed[0].to_dict().status, UNKNOWN_STATUS);
    }

    #[tokio::test]
    async fn test_invalid_stored_row_is_reported() {
        let (dogs, _, pool) = repos().await;
        sqlx::query(
            "INSERT INTO dogs (name, age, gender, intake_date) VALUES ('Old', 31, 'Male', '2024-01-01 00:00:00 UTC')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = dogs.list().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_unparseable_intake_date_is_reported() {
        let (dogs, _, pool) = repos().await;
        sqlx::query(
            "INSERT INTO dogs (name, age, gender, intake_date) VALUES ('Rex', 4, 'Male', 'last tuesday')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = dogs.list().await.unwrap_err();
        assert!(
            matches!(&err, RepositoryError::Serialization(msg) if msg.contains("intake_date")),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let (dogs, _, _) = repos().await;
        let err = dogs.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
