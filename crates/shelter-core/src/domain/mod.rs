//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `dog` - Dog types (`Dog`, `NewDog`, `DogRow`, `DogRecord`)
//! - `breed` - Breed types (`Breed`, `NewBreed`, `BreedRef`)
//! - `status` - Closed value types (`AdoptionStatus`, `Gender`)
//! - `validation` - Attribute validators and `DogValidationError`

mod breed;
mod dog;
mod status;
pub mod validation;

pub use breed::{Breed, BreedRef, NewBreed};
pub use dog::{Dog, DogRecord, DogRow, NewDog, UNKNOWN_STATUS};
pub use status::{AdoptionStatus, Gender};
pub use validation::DogValidationError;
