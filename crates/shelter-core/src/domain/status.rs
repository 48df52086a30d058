//! Closed value types carried by a dog: adoption status and gender.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::{DogValidationError, validate_gender};

/// Where a dog is in the adoption process.
///
/// The symbolic name (`AVAILABLE`, ...) is what gets persisted and
/// serialized; the label (`Available`, ...) is for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    #[default]
    Available,
    Adopted,
    Pending,
}

impl AdoptionStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Adopted, Self::Pending];

    /// Symbolic name used in storage and on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Adopted => "ADOPTED",
            Self::Pending => "PENDING",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Adopted => "Adopted",
            Self::Pending => "Pending",
        }
    }

    /// Parse a symbolic name. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AdoptionStatus {
    type Err = DogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DogValidationError::InvalidStatus(s.to_string()))
    }
}

/// A dog's gender, restricted to the three accepted literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// The literal string form (`"Male"`, `"Female"`, `"Unknown"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate_gender(s)? {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            _ => Ok(Self::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_available() {
        assert_eq!(AdoptionStatus::default(), AdoptionStatus::Available);
    }

    #[test]
    fn test_status_name_round_trips() {
        for status in AdoptionStatus::ALL {
            assert_eq!(AdoptionStatus::from_name(status.name()), Some(status));
            assert_eq!(status.name().parse::<AdoptionStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_serde_uses_symbolic_name() {
        let json = serde_json::to_string(&AdoptionStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }

    #[test]
    fn test_status_rejects_labels_and_unknown_names() {
        assert_eq!(AdoptionStatus::from_name("Available"), None);
        assert_eq!(AdoptionStatus::from_name("UNKNOWN"), None);
        assert!("adopted".parse::<AdoptionStatus>().is_err());
    }

    #[test]
    fn test_status_display_uses_label() {
        assert_eq!(AdoptionStatus::Adopted.to_string(), "Adopted");
    }

    #[test]
    fn test_gender_parses_only_exact_literals() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Unknown".parse::<Gender>(), Ok(Gender::Unknown));
        assert_eq!(
            "female".parse::<Gender>(),
            Err(DogValidationError::InvalidGender("female".to_string()))
        );
    }
}
