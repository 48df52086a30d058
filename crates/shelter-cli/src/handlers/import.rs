//! Import command handler.
//!
//! Loads dogs from a JSON file holding an array of dog objects. Every
//! entry is validated before anything is written, so a bad entry rejects
//! the whole file.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use shelter_core::NewDog;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::add::insert_with_breed;

/// Parse and validate an import document.
pub fn parse_entries(document: &Value) -> Result<Vec<NewDog>, CliError> {
    let entries = document
        .as_array()
        .ok_or_else(|| CliError::Arguments("Import file must hold a JSON array".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            NewDog::from_json(entry).map_err(|e| {
                tracing::warn!(index, error = %e, "Rejected import entry");
                CliError::Arguments(format!("Entry {index}: {e}"))
            })
        })
        .collect()
}

/// Execute the import command. Returns the number of dogs added.
pub async fn execute(ctx: &CliContext, file: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(file).map_err(CliError::from)?;
    let document: Value = serde_json::from_str(&contents)
        .map_err(|e| CliError::Arguments(format!("{}: {e}", file.display())))?;

    let dogs = parse_entries(&document)?;
    let count = dogs.len();
    for dog in dogs {
        insert_with_breed(ctx, dog).await?;
    }

    tracing::info!(count, file = %file.display(), "Import finished");
    println!("Imported {count} dog(s)");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shelter_db::TestDb;

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_entries(&json!({"name": "Buddy"})).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn test_parse_reports_first_invalid_index() {
        let document = json!([
            {"name": "Buddy", "age": 3, "gender": "Male"},
            {"name": "Max", "age": 5.5, "gender": "Male"},
            {"name": "X", "age": 2, "gender": "Female"},
        ]);

        let err = parse_entries(&document).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Entry 1"));
        assert!(message.contains("integer"));
    }

    #[tokio::test]
    async fn test_execute_imports_all_entries() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.app_core());
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dogs.json");
        std::fs::write(
            &file,
            json!([
                {"name": "Buddy", "age": 3, "gender": "Male", "breed": "Labrador"},
                {"name": "Max", "age": 5, "gender": "Male", "breed": "German Shepherd",
                 "status": "PENDING"},
            ])
            .to_string(),
        )
        .unwrap();

        assert_eq!(execute(&ctx, &file).await.unwrap(), 2);

        let records = ctx.app().dogs().list_records().await.unwrap();
        assert_eq!(records[0].breed.as_deref(), Some("Labrador"));
        assert_eq!(records[1].breed.as_deref(), Some("German Shepherd"));
        assert_eq!(records[1].status, "PENDING");
    }

    #[tokio::test]
    async fn test_execute_writes_nothing_when_an_entry_is_invalid() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.app_core());
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dogs.json");
        std::fs::write(
            &file,
            json!([
                {"name": "Buddy", "age": 3, "gender": "Male"},
                {"name": "Max", "age": 30, "gender": "Male"},
            ])
            .to_string(),
        )
        .unwrap();

        assert!(execute(&ctx, &file).await.is_err());
        assert!(ctx.app().dogs().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_breed_rejects_file_before_any_insert() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.app_core());
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dogs.json");
        std::fs::write(
            &file,
            json!([
                {"name": "Buddy", "age": 3, "gender": "Male"},
                {"name": "Max", "age": 5, "gender": "Male", "breed": "   "},
            ])
            .to_string(),
        )
        .unwrap();

        let err = execute(&ctx, &file).await.unwrap_err();

        assert!(err.to_string().contains("Entry 1"));
        assert!(err.to_string().contains("Breed name cannot be empty"));
        assert!(ctx.app().dogs().list().await.unwrap().is_empty());
        assert!(ctx.app().breeds().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_missing_file_is_io_error() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.app_core());

        let err = execute(&ctx, Path::new("/nonexistent/dogs.json"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Io(_))
        ));
    }
}
