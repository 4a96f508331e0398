//! Version metadata read from `VisualMagick/version.toml`.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, VersionMetadata};
use crate::ports::VersionSource;

/// Raw version numbers as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionFile {
    major: u32,
    minor: u32,
    micro: u32,
    patchlevel: u32,
    library_current: u32,
    library_revision: u32,
    library_age: u32,
    magickpp_library_current: u32,
    magickpp_library_revision: u32,
    magickpp_library_age: u32,
    #[serde(default)]
    git_revision: String,
    #[serde(default)]
    release_date: String,
    lib_addendum: Option<String>,
}

impl From<VersionFile> for VersionMetadata {
    fn from(file: VersionFile) -> Self {
        let version = format!("{}.{}.{}", file.major, file.minor, file.micro);
        let lib_addendum = file.lib_addendum.unwrap_or_else(|| format!("-{}", file.patchlevel));
        Self {
            full_version: format!("{}{}", version, lib_addendum),
            lib_version: format!("0x{}{}{}", file.major, file.minor, file.micro),
            lib_version_number: format!(
                "{},{},{}",
                file.library_current, file.library_revision, file.library_age
            ),
            version_number: format!(
                "{},{},{},{}",
                file.major, file.minor, file.micro, file.patchlevel
            ),
            interface_version: file.library_current.to_string(),
            pp_interface_version: file.magickpp_library_current.to_string(),
            pp_lib_version_number: format!(
                "{}:{}:{}",
                file.magickpp_library_current,
                file.magickpp_library_revision,
                file.magickpp_library_age
            ),
            git_revision: file.git_revision,
            release_date: file.release_date,
            lib_addendum,
            version,
        }
    }
}

/// Parse the content of a version file.
pub fn parse_version(content: &str) -> Result<VersionMetadata, AppError> {
    toml::from_str::<VersionFile>(content)
        .map(VersionMetadata::from)
        .map_err(|e| AppError::ParseError { what: "version.toml".into(), details: e.to_string() })
}

/// Loads the version record from a TOML file.
#[derive(Debug, Clone)]
pub struct TomlVersionSource {
    path: PathBuf,
}

impl TomlVersionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionSource for TomlVersionSource {
    fn load(&self) -> Result<VersionMetadata, AppError> {
        let content = fs::read_to_string(&self.path)?;
        parse_version(&content)
    }
}
