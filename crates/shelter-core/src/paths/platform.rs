//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "SHELTER_DATA_DIR";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `SHELTER_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/shelter`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var_os(DATA_DIR_ENV) {
        Some(path) => resolve_override(Path::new(&path))?,
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("shelter"),
    };

    ensure_dir(&root)?;
    Ok(root)
}

fn resolve_override(path: &Path) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }
    Ok(path.to_path_buf())
}

pub(super) fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_override_is_rejected() {
        assert!(matches!(
            resolve_override(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_ensure_dir_creates_nested_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }
}
