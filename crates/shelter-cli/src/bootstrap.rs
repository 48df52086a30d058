//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the fully-composed
//! `AppCore` and delegate work to it.

use std::path::PathBuf;

use anyhow::Result;
use shelter_core::{AppCore, database_path};

use crate::error::CliError;
use shelter_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database file to open (created when missing).
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path().map_err(CliError::from)?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Wrap an already-assembled core.
    pub const fn new(app: AppCore) -> Self {
        Self { app }
    }

    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Open the database and assemble the application core.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "shelter.paths",
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(CliContext::new(CoreFactory::build_app_core(pool)))
}
