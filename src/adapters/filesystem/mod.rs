//! `ProjectSource` backed by the local filesystem.

use std::fs;
use std::path::Path;

use crate::domain::paths::MANIFEST_FILENAME;
use crate::domain::{AppError, ComponentManifest, parse_manifest};
use crate::ports::ProjectSource;

/// Reads the component tree directly from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProjectSource;

impl FilesystemProjectSource {
    pub fn new() -> Self {
        Self
    }

    fn entry_names(dir: &Path, want_dirs: bool) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let matches = if want_dirs { file_type.is_dir() } else { file_type.is_file() };
            if !matches {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ProjectSource for FilesystemProjectSource {
    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        Self::entry_names(dir, true)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        Self::entry_names(dir, false)
    }

    fn read_manifest(&self, dir: &Path) -> Result<Option<ComponentManifest>, AppError> {
        let path = dir.join(MANIFEST_FILENAME);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        parse_manifest(&content, name).map(Some)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
