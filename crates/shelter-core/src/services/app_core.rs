//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::{BreedService, DogService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let dogs = core.dogs().list_records().await?;
/// ```
pub struct AppCore {
    dogs: DogService,
    breeds: BreedService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            dogs: DogService::new(repos.dogs),
            breeds: BreedService::new(repos.breeds),
        }
    }

    /// Access the dog service.
    pub const fn dogs(&self) -> &DogService {
        &self.dogs
    }

    /// Access the breed service.
    pub const fn breeds(&self) -> &BreedService {
        &self.breeds
    }
}
