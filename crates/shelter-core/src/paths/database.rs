//! Database path resolution.
//!
//! Provides the canonical path to the shelter `SQLite` database file.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the database inside the `data/` directory.
pub const DATABASE_FILE_NAME: &str = "shelter.db";

/// Get the path to the shelter database file.
///
/// Returns `<data root>/data/shelter.db`, creating `data/` if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_in_creates_data_dir() {
        let temp = tempdir().unwrap();
        let path = database_path_in(temp.path()).unwrap();

        assert!(path.to_string_lossy().ends_with("shelter.db"));
        assert!(temp.path().join("data").is_dir());
    }
}
