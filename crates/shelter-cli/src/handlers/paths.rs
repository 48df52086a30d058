//! Paths command handler.
//!
//! Displays the resolved data paths for diagnostics.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use shelter_core::paths::DATA_DIR_ENV;
use shelter_core::{data_root, database_path};

use crate::error::CliError;

fn format_paths(root: &Path, database: &Path, overridden: bool) -> String {
    let mut out = String::new();
    let source = if overridden { DATA_DIR_ENV } else { "default" };
    let _ = writeln!(out, "data_root = {} ({source})", root.display());
    let _ = write!(out, "database_path = {}", database.display());
    out
}

/// Execute the paths command.
///
/// Prints the data root and database file in `key = value` format.
pub fn execute() -> Result<()> {
    let root = data_root().map_err(CliError::from)?;
    let database = database_path().map_err(CliError::from)?;
    let overridden = std::env::var_os(DATA_DIR_ENV).is_some();
    println!("{}", format_paths(&root, &database, overridden));
    Ok(())
}
