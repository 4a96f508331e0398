//! Init command: writes the default build configuration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::config::DEFAULT_CONFIG;
use crate::domain::AppError;
use crate::domain::paths::CONFIG_FILENAME;

/// Create `configure.yml` in `root`.
///
/// Returns the path of the written file.
pub fn execute(root: &Path) -> Result<PathBuf, AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }

    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        return Err(AppError::ConfigExists(path));
    }

    fs::write(&path, DEFAULT_CONFIG)?;
    Ok(path)
}
