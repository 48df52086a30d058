//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use shelter_core::{AppCore, Repos};

use crate::repositories::{SqliteBreedRepository, SqliteDogRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteDogRepository::new(pool.clone())),
            Arc::new(SqliteBreedRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied, plus shortcuts for seeding rows.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build an `AppCore` over this database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }

    /// Insert a breed and return its ID.
    pub async fn seed_breed(&self, name: &str) -> anyhow::Result<i64> {
        let result = sqlx::query("INSERT INTO breeds (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a dog row directly, bypassing validation, and return its ID.
    pub async fn seed_dog(
        &self,
        name: &str,
        breed_id: Option<i64>,
        age: i64,
        gender: &str,
    ) -> anyhow::Result<i64> {
        let result = sqlx::query(
            "INSERT INTO dogs (name, breed_id, age, gender, intake_date) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(breed_id)
        .bind(age)
        .bind(gender)
        .bind(chrono::Utc::now().to_string())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
