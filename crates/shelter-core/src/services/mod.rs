//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod breed_service;
mod dog_service;

pub use app_core::AppCore;
pub use breed_service::BreedService;
pub use dog_service::DogService;
