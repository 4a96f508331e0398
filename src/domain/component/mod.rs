//! Component domain model: discoverable build units and their project files.

mod file_descriptor;
mod guid;
mod manifest;

pub use file_descriptor::{FileDescriptor, ProjectFileConfig};
pub use guid::project_guid;
pub use manifest::{ComponentManifest, FileKind, FileSpec, parse_manifest};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::artifacts::component_notice;
use crate::domain::paths::{split_logical, windows_path};
use crate::domain::{AppError, ComponentId, Configuration, Linkage, ToolchainVersion};
use crate::ports::ProjectSource;

/// Root-folder category a component was discovered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Dependency,
    OptionalDependency,
    Primary,
}

impl ComponentKind {
    /// Category of a discovery root, by config folder name.
    pub fn from_config_folder(folder: &str) -> Self {
        match folder {
            "Dependencies" => ComponentKind::Dependency,
            "OptionalDependencies" => ComponentKind::OptionalDependency,
            _ => ComponentKind::Primary,
        }
    }

    /// Whether a failure to load the component is expected.
    pub fn is_optional(self) -> bool {
        self == ComponentKind::OptionalDependency
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Dependency => "dependency",
            ComponentKind::OptionalDependency => "optional-dependency",
            ComponentKind::Primary => "project",
        }
    }
}

/// Capabilities every build unit exposes to the generator.
pub trait BuildUnit {
    fn name(&self) -> &str;

    /// Whether the unit can be built with `toolchain`.
    fn is_supported(&self, toolchain: ToolchainVersion) -> bool;

    /// Materialize the unit's file descriptors.
    ///
    /// Returns `Ok(false)` when the unit is deliberately not built for `config`.
    fn load_files(
        &mut self,
        config: &Configuration,
        source: &dyn ProjectSource,
    ) -> Result<bool, AppError>;

    fn files(&self) -> &[FileDescriptor];

    /// License notice; empty when the unit contributes none.
    fn notice(&self) -> &str;

    /// Text contributed to the base configuration header.
    fn config_define(&self) -> &str;

    /// Whether `config` excludes the unit from the build.
    fn should_skip(&self, config: &Configuration) -> bool;
}

/// A discovered build unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: ComponentId,
    kind: ComponentKind,
    /// Logical files folder relative to the project root, e.g. `Dependencies\zlib`.
    files_folder: String,
    /// Absolute files folder.
    files_path: PathBuf,
    manifest: ComponentManifest,
    files: Vec<FileDescriptor>,
    notice: String,
}

impl Component {
    /// Build a component from its manifest.
    ///
    /// `dir_name` names the discovered directory and is the default component name.
    pub fn from_manifest(
        kind: ComponentKind,
        files_root: &str,
        root: &Path,
        dir_name: &str,
        manifest: ComponentManifest,
    ) -> Result<Self, AppError> {
        let name_str = manifest.name.clone().unwrap_or_else(|| dir_name.to_string());
        let name = ComponentId::new(&name_str).map_err(|_| AppError::InvalidComponentMetadata {
            component: dir_name.to_string(),
            reason: format!("Invalid component name '{}'", name_str),
        })?;

        for file in &manifest.files {
            if ComponentId::new(&file.name).is_err() {
                return Err(AppError::InvalidComponentMetadata {
                    component: dir_name.to_string(),
                    reason: format!("Invalid project file name '{}'", file.name),
                });
            }
        }

        let files_folder = windows_path([files_root, dir_name]);
        let files_path = root.join(files_root).join(dir_name);

        Ok(Self {
            name,
            kind,
            files_folder,
            files_path,
            manifest,
            files: Vec::new(),
            notice: String::new(),
        })
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn files_folder(&self) -> &str {
        &self.files_folder
    }

    pub fn dependencies(&self) -> &[String] {
        &self.manifest.dependencies
    }

    /// Forget every loaded file and the notice.
    pub fn clear_files(&mut self) {
        self.files.clear();
        self.notice.clear();
    }

    /// Load the lazily built configuration of every file.
    ///
    /// Returns the number of files loaded.
    pub fn load_file_configs(&mut self, source: &dyn ProjectSource) -> Result<usize, AppError> {
        for file in &mut self.files {
            file.load_config(&self.files_path, source)?;
        }
        Ok(self.files.len())
    }

    /// Drop files the toolchain cannot build and files with a duplicate name.
    pub fn check_files(&mut self, toolchain: ToolchainVersion) {
        let component = self.name.as_str();
        let mut seen: Vec<String> = Vec::new();
        self.files.retain(|file| {
            if !file.is_supported(toolchain) {
                debug!(component, project = file.name(), %toolchain, "project not supported");
                return false;
            }
            if seen.iter().any(|name| name == file.name()) {
                warn!(component, project = file.name(), "duplicate project name dropped");
                return false;
            }
            seen.push(file.name().to_string());
            true
        });
    }

    /// Keep only the files for which `keep` returns true.
    pub fn retain_files(&mut self, keep: impl FnMut(&FileDescriptor) -> bool) {
        self.files.retain(keep);
    }

    /// Fold satellite files into their primary file for static builds.
    pub fn merge_project_files(&mut self, config: &Configuration) {
        if config.linkage != Linkage::Static {
            return;
        }

        let (satellites, mut primaries): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.files).into_iter().partition(|file| file.merge_into().is_some());

        for satellite in satellites {
            let target = satellite.merge_into().unwrap_or_default().to_string();
            match primaries.iter_mut().find(|file| file.name() == target) {
                Some(primary) => primary.absorb(satellite),
                None => {
                    warn!(
                        component = self.name.as_str(),
                        project = satellite.name(),
                        target = %target,
                        "merge target not found, keeping project"
                    );
                    primaries.push(satellite);
                }
            }
        }

        self.files = primaries;
    }

    /// Build the license notice. Unreadable license files are left out.
    fn load_notice(&mut self, source: &dyn ProjectSource) {
        if self.kind == ComponentKind::Primary || self.manifest.licenses.is_empty() {
            self.notice.clear();
            return;
        }

        let mut texts = Vec::new();
        for license in &self.manifest.licenses {
            let path = split_logical(license).fold(self.files_path.clone(), |path, part| path.join(part));
            match source.read_text(&path) {
                Ok(text) => texts.push(text),
                Err(err) => warn!(
                    component = self.name.as_str(),
                    license = %license,
                    error = %err,
                    "license unavailable"
                ),
            }
        }

        let title = match &self.manifest.version {
            Some(version) => format!("{} {}", self.name, version),
            None => self.name.to_string(),
        };
        self.notice = component_notice(&title, &texts);
    }
}

impl BuildUnit for Component {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_supported(&self, toolchain: ToolchainVersion) -> bool {
        self.manifest.minimum_toolchain.is_none_or(|minimum| toolchain >= minimum)
    }

    fn load_files(
        &mut self,
        config: &Configuration,
        source: &dyn ProjectSource,
    ) -> Result<bool, AppError> {
        self.clear_files();

        if self.should_skip(config) {
            return Ok(false);
        }

        if !source.is_dir(&self.files_path) {
            return Err(AppError::ComponentLoad {
                component: self.name.to_string(),
                reason: format!("files folder '{}' not found", self.files_folder),
            });
        }

        self.load_notice(source);

        let solution_name = config.solution_name();
        self.files = self
            .manifest
            .files
            .iter()
            .cloned()
            .map(|spec| FileDescriptor::new(self.name.as_str(), spec, solution_name))
            .collect();
        Ok(true)
    }

    fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    fn notice(&self) -> &str {
        &self.notice
    }

    fn config_define(&self) -> &str {
        &self.manifest.config_define
    }

    fn should_skip(&self, config: &Configuration) -> bool {
        self.manifest.requires.iter().any(|feature| !config.is_enabled(*feature))
    }
}
