//! `SQLite` implementation of the `BreedRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use shelter_core::{Breed, BreedRepository, NewBreed, RepositoryError};

use super::row_mappers::{BREED_SELECT_COLUMNS, row_to_breed};

/// `SQLite` implementation of the `BreedRepository` trait.
pub struct SqliteBreedRepository {
    pool: SqlitePool,
}

impl SqliteBreedRepository {
    /// Create a new `SQLite` breed repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BreedRepository for SqliteBreedRepository {
    async fn list(&self) -> Result<Vec<Breed>, RepositoryError> {
        let query = format!("SELECT {BREED_SELECT_COLUMNS} FROM breeds ORDER BY name");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_breed).collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Breed, RepositoryError> {
        let query = format!("SELECT {BREED_SELECT_COLUMNS} FROM breeds WHERE name = ?");

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Breed '{name}'")))?;

        row_to_breed(&row)
    }

    async fn insert(&self, breed: &NewBreed) -> Result<Breed, RepositoryError> {
        let result = sqlx::query("INSERT INTO breeds (name, description) VALUES (?, ?)")
            .bind(&breed.name)
            .bind(&breed.description)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::AlreadyExists(format!("Breed '{}'", breed.name))
                }
                other => RepositoryError::Storage(other.to_string()),
            })?;

        Ok(Breed {
            id: result.last_insert_rowid(),
            name: breed.name.clone(),
            description: breed.description.clone(),
        })
    }
}
