//! Attribute validators for the dog entity.
//!
//! Every validator is pure: the same input always produces the same value
//! or the same error. They are called by the validating setters on
//! [`Dog`](super::Dog), by the [`NewDog`](super::NewDog) constructors, and
//! when rows are hydrated from storage.

use serde_json::Value;
use thiserror::Error;

/// Youngest accepted age, in years.
pub const MIN_AGE_YEARS: i64 = 0;

/// Oldest accepted age, in years.
pub const MAX_AGE_YEARS: i64 = 20;

/// Minimum length of a dog's name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length of a description when one is given, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// The literal gender values a dog may carry.
pub const ALLOWED_GENDERS: [&str; 3] = ["Male", "Female", "Unknown"];

/// An attribute value that violates one of the dog invariants.
///
/// Each message names the constraint that was broken so it can be shown
/// to a client unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DogValidationError {
    #[error("Age cannot be absent (value required)")]
    AgeMissing,

    #[error("Age must be an integer")]
    AgeNotInteger,

    #[error("Dog age must be between 0 and 20 years, got {0}")]
    AgeOutOfRange(i128),

    #[error("Dog name cannot be absent (value required)")]
    NameMissing,

    #[error("Dog name must be at least 2 characters long, got {0}")]
    NameTooShort(usize),

    #[error("Gender cannot be absent (value required)")]
    GenderMissing,

    #[error("Gender must be 'Male', 'Female', or 'Unknown', got '{0}'")]
    InvalidGender(String),

    #[error("Breed name cannot be empty")]
    BreedBlank,

    #[error("Description must be at least 10 characters long, got {0}")]
    DescriptionTooShort(usize),

    #[error("Status must be one of AVAILABLE, ADOPTED, PENDING, got '{0}'")]
    InvalidStatus(String),

    #[error("{0} must be a string")]
    NotAString(&'static str),

    #[error("Dog attributes must be a JSON object")]
    NotAnObject,
}

/// Validates a dog's age given as an untyped value.
///
/// `null` is reported as absent, any non-integer value (floats, strings,
/// booleans, arrays, objects) as the wrong type, and integers outside
/// `0..=20` as out of range. Returns the unchanged integer.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shelter_core::domain::validation::{DogValidationError, validate_age};
///
/// assert_eq!(validate_age(&json!(5)), Ok(5));
/// assert_eq!(validate_age(&json!(null)), Err(DogValidationError::AgeMissing));
/// assert_eq!(validate_age(&json!(5.5)), Err(DogValidationError::AgeNotInteger));
/// assert_eq!(validate_age(&json!("5")), Err(DogValidationError::AgeNotInteger));
/// ```
pub fn validate_age(age: &Value) -> Result<i64, DogValidationError> {
    match age {
        Value::Null => Err(DogValidationError::AgeMissing),
        Value::Number(n) => {
            if let Some(years) = n.as_i64() {
                validate_age_years(years)
            } else if let Some(years) = n.as_u64() {
                // Only reachable above i64::MAX
                Err(DogValidationError::AgeOutOfRange(i128::from(years)))
            } else {
                Err(DogValidationError::AgeNotInteger)
            }
        }
        _ => Err(DogValidationError::AgeNotInteger),
    }
}

/// Range check for an age that is already known to be an integer.
pub fn validate_age_years(age: i64) -> Result<i64, DogValidationError> {
    if age < MIN_AGE_YEARS || age > MAX_AGE_YEARS {
        return Err(DogValidationError::AgeOutOfRange(i128::from(age)));
    }
    Ok(age)
}

/// Validates a dog's name: at least two characters.
pub fn validate_name(name: &str) -> Result<&str, DogValidationError> {
    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Err(DogValidationError::NameTooShort(len));
    }
    Ok(name)
}

/// Validates a gender literal. Matching is exact and case-sensitive.
pub fn validate_gender(gender: &str) -> Result<&str, DogValidationError> {
    if ALLOWED_GENDERS.contains(&gender) {
        Ok(gender)
    } else {
        Err(DogValidationError::InvalidGender(gender.to_string()))
    }
}

/// Validates a breed reference, returning the trimmed name.
pub fn validate_breed_name(name: &str) -> Result<&str, DogValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DogValidationError::BreedBlank);
    }
    Ok(trimmed)
}

/// Validates an optional description.
///
/// Absence is allowed; a present description needs at least ten characters.
pub fn validate_description(
    description: Option<&str>,
) -> Result<Option<&str>, DogValidationError> {
    match description {
        None => Ok(None),
        Some(text) => {
            let len = text.chars().count();
            if len < MIN_DESCRIPTION_LEN {
                return Err(DogValidationError::DescriptionTooShort(len));
            }
            Ok(Some(text))
        }
    }
}
