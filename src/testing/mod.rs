//! Test doubles for the generator ports.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::paths::MANIFEST_FILENAME;
use crate::domain::{AppError, ComponentManifest, VersionMetadata, parse_manifest};
use crate::ports::{ProgressSink, ProjectSource, VersionSource};

/// In-memory component tree.
#[derive(Debug, Default, Clone)]
pub struct MemoryProjectSource {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryProjectSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, content.to_string());
        self
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    fn add_dir(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn not_found(path: &Path) -> AppError {
        AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

impl ProjectSource for MemoryProjectSource {
    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        if !self.dirs.contains(dir) {
            return Err(Self::not_found(dir));
        }
        Ok(self
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(dir))
            .filter_map(|d| d.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        if !self.dirs.contains(dir) {
            return Err(Self::not_found(dir));
        }
        Ok(self
            .files
            .keys()
            .filter(|f| f.parent() == Some(dir))
            .filter_map(|f| f.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect())
    }

    fn read_manifest(&self, dir: &Path) -> Result<Option<ComponentManifest>, AppError> {
        let Some(content) = self.files.get(&dir.join(MANIFEST_FILENAME)) else {
            return Ok(None);
        };
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        parse_manifest(content, name).map(Some)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| Self::not_found(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

/// Progress sink that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub labels: Vec<String>,
}

impl ProgressSink for RecordingProgress {
    fn set_total_steps(&mut self, steps: usize) {
        self.total = Some(steps);
    }

    fn advance(&mut self, label: &str) {
        self.labels.push(label.to_string());
    }
}

/// Version source returning a fixed record, or failing when empty.
#[derive(Debug, Default, Clone)]
pub struct StaticVersionSource(pub Option<VersionMetadata>);

impl VersionSource for StaticVersionSource {
    fn load(&self) -> Result<VersionMetadata, AppError> {
        self.0.clone().ok_or_else(|| AppError::config_error("version metadata unavailable"))
    }
}

/// A representative version record.
pub fn sample_version() -> VersionMetadata {
    VersionMetadata {
        version: "7.1.1".into(),
        full_version: "7.1.1-15".into(),
        lib_version: "0x711".into(),
        lib_version_number: "10,0,0".into(),
        version_number: "7,1,1,15".into(),
        interface_version: "10".into(),
        pp_interface_version: "5".into(),
        pp_lib_version_number: "5:0:0".into(),
        git_revision: "a1b2c3d".into(),
        release_date: "2023-08-14".into(),
        lib_addendum: "-15".into(),
    }
}
