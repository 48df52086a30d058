//! Core domain for the shelter adoption service.
//!
//! Holds the dog entity and its attribute validators, the transport record
//! produced by [`Dog::to_dict`], the repository ports implemented by
//! `shelter-db`, and the services adapters call into.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AdoptionStatus, Breed, BreedRef, Dog, DogRecord, DogRow, DogValidationError, Gender, NewBreed,
    NewDog, UNKNOWN_STATUS,
};
pub use domain::validation::{
    validate_age, validate_age_years, validate_breed_name, validate_description, validate_gender,
    validate_name,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{BreedRepository, CoreError, DogRepository, Repos, RepositoryError};
pub use services::{AppCore, BreedService, DogService};
