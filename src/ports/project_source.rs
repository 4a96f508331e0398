//! Read-only access to the component tree.

use std::path::Path;

use crate::domain::{AppError, ComponentManifest};

/// Port for reading component definitions and their files.
///
/// All `path` arguments are absolute paths inside the project root.
pub trait ProjectSource {
    /// Names of the immediate subdirectories of `dir`, sorted.
    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Names of the regular files directly inside `dir`, sorted.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Parse the manifest of a component config folder.
    ///
    /// Returns `Ok(None)` when the folder carries no manifest.
    fn read_manifest(&self, dir: &Path) -> Result<Option<ComponentManifest>, AppError>;

    /// Read a file as text; invalid UTF-8 sequences are replaced.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
