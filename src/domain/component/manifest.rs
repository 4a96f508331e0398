//! Component manifest model (`project.toml`).

use serde::Deserialize;

use crate::domain::{AppError, Feature, ToolchainVersion};

/// Metadata parsed from a component's `project.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    /// Component name (defaults to directory name if missing).
    pub name: Option<String>,
    /// Upstream version, shown in the notice.
    #[serde(default)]
    pub version: Option<String>,
    /// Oldest toolchain able to build the component.
    #[serde(default)]
    pub minimum_toolchain: Option<ToolchainVersion>,
    /// License files, relative to the component's files folder.
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Text contributed to `magick-baseconfig.h`.
    #[serde(default)]
    pub config_define: String,
    /// Features that must be enabled for the component to be built.
    #[serde(default)]
    pub requires: Vec<Feature>,
    /// Sibling components whose projects are referenced.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Project files generated for the component.
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

/// One `[[files]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSpec {
    /// Project display name.
    pub name: String,
    #[serde(default)]
    pub kind: FileKind,
    /// Directories (relative to the files folder) scanned for compile units.
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub defines: Vec<String>,
    /// Primary file this satellite is folded into for static builds.
    #[serde(default)]
    pub merge_into: Option<String>,
    #[serde(default)]
    pub minimum_toolchain: Option<ToolchainVersion>,
}

/// Output produced by a project file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[default]
    Dll,
    Lib,
    Exe,
}

impl FileKind {
    /// Whether sibling projects may link against this output.
    pub fn is_library(self) -> bool {
        !matches!(self, FileKind::Exe)
    }
}

/// Parse manifest content.
pub fn parse_manifest(content: &str, component: &str) -> Result<ComponentManifest, AppError> {
    toml::from_str(content).map_err(|e| AppError::InvalidComponentMetadata {
        component: component.to_string(),
        reason: e.to_string(),
    })
}
