//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use shelter_core::{Breed, BreedRef, Dog, DogRow, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT for dogs with their breed LEFT JOINed.
pub const DOG_SELECT: &str = "SELECT d.id, d.name, d.age, d.gender, d.description, d.status, d.intake_date, d.adoption_date, b.id AS breed_id, b.name AS breed_name FROM dogs d LEFT JOIN breeds b ON b.id = d.breed_id";

/// Shared SELECT column list for breed queries.
pub const BREED_SELECT_COLUMNS: &str = "id, name, description";

/// Format a timestamp the way it is stored.
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_string()
}

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

fn stored_datetime(id: i64, name: &str, raw: String) -> Result<DateTime<Utc>, RepositoryError> {
    parse_datetime(Some(raw.clone())).ok_or_else(|| {
        RepositoryError::Serialization(format!("Dog with ID {id}: invalid {name} '{raw}'"))
    })
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a joined database row into a `Dog`.
///
/// Stored values go through the same validators as fresh input; a row that
/// fails them is reported as a serialization error.
pub fn row_to_dog(row: &SqliteRow) -> Result<Dog, RepositoryError> {
    let id: i64 = column(row, "id")?;

    let breed = match (
        column::<Option<i64>>(row, "breed_id")?,
        column::<Option<String>>(row, "breed_name")?,
    ) {
        (Some(breed_id), Some(name)) => Some(BreedRef { id: breed_id, name }),
        _ => None,
    };

    let intake_date = stored_datetime(id, "intake_date", column(row, "intake_date")?)?;
    let adoption_date = column::<Option<String>>(row, "adoption_date")?
        .map(|raw| stored_datetime(id, "adoption_date", raw))
        .transpose()?;

    let raw = DogRow {
        id,
        name: column(row, "name")?,
        breed,
        age: column(row, "age")?,
        gender: column(row, "gender")?,
        description: column(row, "description")?,
        status: column(row, "status")?,
        intake_date,
        adoption_date,
    };

    Dog::try_from(raw)
        .map_err(|e| RepositoryError::Serialization(format!("Dog with ID {id}: {e}")))
}

/// Parse a database row into a `Breed`.
pub fn row_to_breed(row: &SqliteRow) -> Result<Breed, RepositoryError> {
    Ok(Breed {
        id: column(row, "id")?,
        name: column(row, "name")?,
        description: column(row, "description")?,
    })
}
