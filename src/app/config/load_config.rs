use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::paths::CONFIG_FILENAME;
use crate::domain::{AppError, Configuration};

/// Commented default written by `slngen init`.
pub const DEFAULT_CONFIG: &str = include_str!("../../assets/configure.yml");

/// Configuration file used when none is given explicitly.
pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => root.join(CONFIG_FILENAME),
    }
}

/// Load and validate a build configuration.
pub fn load_config(path: &Path) -> Result<Configuration, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config: Configuration = serde_yaml::from_str(&content).map_err(|e| AppError::ParseError {
        what: path.display().to_string(),
        details: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}
