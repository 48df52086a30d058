//! Dog domain types.
//!
//! A [`Dog`] keeps its fields private so that every assignment goes through
//! a validating setter; an invalid value is rejected before it is stored.
//! [`NewDog`] is the not-yet-persisted form and validates on construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::breed::BreedRef;
use super::status::{AdoptionStatus, Gender};
use super::validation::{
    DogValidationError, validate_age, validate_age_years, validate_breed_name,
    validate_description, validate_name,
};

/// Status literal used when a stored dog has no recognised status.
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

// ─────────────────────────────────────────────────────────────────────────────
// Persisted dog
// ─────────────────────────────────────────────────────────────────────────────

/// A dog that exists in the system with a database ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    id: i64,
    name: String,
    breed: Option<BreedRef>,
    age: i64,
    gender: Gender,
    description: Option<String>,
    status: Option<AdoptionStatus>,
    intake_date: DateTime<Utc>,
    adoption_date: Option<DateTime<Utc>>,
}

/// Raw attribute values for a stored dog, as read from storage.
///
/// Converting into a [`Dog`] runs every validator, so a corrupted row can
/// never surface as a valid entity.
#[derive(Debug, Clone)]
pub struct DogRow {
    pub id: i64,
    pub name: String,
    pub breed: Option<BreedRef>,
    pub age: i64,
    pub gender: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub intake_date: DateTime<Utc>,
    pub adoption_date: Option<DateTime<Utc>>,
}

impl TryFrom<DogRow> for Dog {
    type Error = DogValidationError;

    fn try_from(row: DogRow) -> Result<Self, Self::Error> {
        validate_name(&row.name)?;
        validate_age_years(row.age)?;
        validate_description(row.description.as_deref())?;
        let gender = row.gender.parse::<Gender>()?;

        let status = row.status.as_deref().and_then(|name| {
            let parsed = AdoptionStatus::from_name(name);
            if parsed.is_none() {
                tracing::warn!(dog_id = row.id, status = name, "Unrecognised stored status");
            }
            parsed
        });

        Ok(Self {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            gender,
            description: row.description,
            status,
            intake_date: row.intake_date,
            adoption_date: row.adoption_date,
        })
    }
}

impl Dog {
    pub const fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn breed(&self) -> Option<&BreedRef> {
        self.breed.as_ref()
    }

    pub const fn age(&self) -> i64 {
        self.age
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `None` only when a stored row carried no recognised status.
    pub const fn status(&self) -> Option<AdoptionStatus> {
        self.status
    }

    pub const fn intake_date(&self) -> DateTime<Utc> {
        self.intake_date
    }

    pub const fn adoption_date(&self) -> Option<DateTime<Utc>> {
        self.adoption_date
    }

    /// Replace the name. Rejected names leave the dog unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DogValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the age. Rejected ages leave the dog unchanged.
    pub fn set_age(&mut self, age: i64) -> Result<(), DogValidationError> {
        self.age = validate_age_years(age)?;
        Ok(())
    }

    /// Replace the gender from its literal form.
    pub fn set_gender(&mut self, gender: &str) -> Result<(), DogValidationError> {
        self.gender = gender.parse()?;
        Ok(())
    }

    /// Replace or clear the description.
    pub fn set_description(&mut self, description: Option<String>) -> Result<(), DogValidationError> {
        validate_description(description.as_deref())?;
        self.description = description;
        Ok(())
    }

    pub fn set_breed(&mut self, breed: Option<BreedRef>) {
        self.breed = breed;
    }

    pub fn set_status(&mut self, status: AdoptionStatus) {
        self.status = Some(status);
    }

    /// Complete an adoption: status becomes `ADOPTED` and the date is recorded.
    pub fn mark_adopted(&mut self, at: DateTime<Utc>) {
        self.status = Some(AdoptionStatus::Adopted);
        self.adoption_date = Some(at);
    }

    /// Serialize into the transport record consumed by the listing endpoint.
    #[must_use]
    pub fn to_dict(&self) -> DogRecord {
        DogRecord {
            id: self.id,
            name: self.name.clone(),
            breed: self.breed.as_ref().map(|b| b.name.clone()),
            age: self.age,
            gender: self.gender.as_str().to_string(),
            description: self.description.clone(),
            status: self
                .status
                .map_or(UNKNOWN_STATUS, AdoptionStatus::name)
                .to_string(),
        }
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.map_or(UNKNOWN_STATUS, AdoptionStatus::label);
        write!(f, "<Dog {}, ID: {}, Status: {}>", self.name, self.id, status)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire record
// ─────────────────────────────────────────────────────────────────────────────

/// Plain, key-ordered representation of a dog for transport.
///
/// Field order and names are the wire contract of `GET /api/dogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    pub id: i64,
    pub name: String,
    pub breed: Option<String>,
    pub age: i64,
    pub gender: String,
    pub description: Option<String>,
    pub status: String,
}

impl DogRecord {
    /// Serialized keys, in order.
    pub const FIELDS: [&'static str; 7] = [
        "id",
        "name",
        "breed",
        "age",
        "gender",
        "description",
        "status",
    ];
}

// ─────────────────────────────────────────────────────────────────────────────
// Dog awaiting insertion
// ─────────────────────────────────────────────────────────────────────────────

/// A dog to be inserted into the system (no ID yet).
///
/// Constructed through [`NewDog::new`] or [`NewDog::from_json`]; both
/// validate every attribute. The breed is referenced by name and resolved
/// by the repository at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDog {
    name: String,
    breed: Option<String>,
    age: i64,
    gender: Gender,
    description: Option<String>,
    status: AdoptionStatus,
    intake_date: DateTime<Utc>,
}

impl NewDog {
    /// Create a new dog with the required attributes.
    ///
    /// Status defaults to `AVAILABLE` and the intake date to now.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        gender: &str,
    ) -> Result<Self, DogValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            breed: None,
            age: validate_age_years(age)?,
            gender: gender.parse()?,
            description: None,
            status: AdoptionStatus::default(),
            intake_date: Utc::now(),
        })
    }

    /// Attach a description.
    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Result<Self, DogValidationError> {
        let description = description.into();
        validate_description(Some(&description))?;
        self.description = Some(description);
        Ok(self)
    }

    /// Reference a breed by name. The name is trimmed and must not be blank.
    pub fn with_breed(mut self, breed: &str) -> Result<Self, DogValidationError> {
        self.breed = Some(validate_breed_name(breed)?.to_string());
        Ok(self)
    }

    #[must_use]
    pub const fn with_status(mut self, status: AdoptionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_intake_date(mut self, intake_date: DateTime<Utc>) -> Self {
        self.intake_date = intake_date;
        self
    }

    /// Build a dog from an untyped JSON object.
    ///
    /// Recognised keys: `name`, `age`, `gender` (required), `description`,
    /// `breed`, `status` (optional). Unknown keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, DogValidationError> {
        let attrs = value.as_object().ok_or(DogValidationError::NotAnObject)?;

        let name = match attrs.get("name") {
            None | Some(Value::Null) => return Err(DogValidationError::NameMissing),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(DogValidationError::NotAString("name")),
        };
        let age = validate_age(attrs.get("age").unwrap_or(&Value::Null))?;
        let gender = match attrs.get("gender") {
            None | Some(Value::Null) => return Err(DogValidationError::GenderMissing),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(DogValidationError::NotAString("gender")),
        };

        let mut dog = Self::new(name, age, &gender)?;

        if let Some(description) = optional_string(attrs, "description")? {
            dog = dog.with_description(description)?;
        }
        if let Some(breed) = optional_string(attrs, "breed")? {
            dog = dog.with_breed(&breed)?;
        }
        if let Some(status) = optional_string(attrs, "status")? {
            dog = dog.with_status(status.parse()?);
        }

        Ok(dog)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub const fn age(&self) -> i64 {
        self.age
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn status(&self) -> AdoptionStatus {
        self.status
    }

    pub const fn intake_date(&self) -> DateTime<Utc> {
        self.intake_date
    }
}

fn optional_string(
    attrs: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, DogValidationError> {
    match attrs.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DogValidationError::NotAString(key)),
    }
}
