//! Render model of a single component project file.

use serde::Serialize;

use crate::domain::paths::windows_path;
use crate::domain::{BuildUnit, Component, Configuration, FileDescriptor, FileKind, Linkage};

/// Path from a project file directory back to the project root.
const ROOT_FROM_PROJECT: &str = "..\\..";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReference {
    pub name: String,
    /// Referenced project file, relative to the referencing project.
    pub include: String,
    pub guid: String,
}

/// Everything a project template needs, with paths already relative to the
/// project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectModel {
    pub name: String,
    pub guid: String,
    pub configuration_type: &'static str,
    pub toolset: &'static str,
    pub platform: &'static str,
    pub output_directory: String,
    pub sources: Vec<String>,
    pub includes: Vec<String>,
    pub defines: Vec<String>,
    pub references: Vec<ProjectReference>,
}

impl ProjectModel {
    /// Build the model of `file`, owned by `owner`.
    ///
    /// Library files of the owner's declared dependencies found in
    /// `components` become project references.
    pub fn build(
        owner: &Component,
        file: &FileDescriptor,
        components: &[Component],
        config: &Configuration,
    ) -> Self {
        let from_root = |parts: &[&str]| format!("{}\\{}", ROOT_FROM_PROJECT, windows_path(parts));
        let folder = owner.files_folder();

        let references = owner
            .dependencies()
            .iter()
            .filter_map(|dependency| components.iter().find(|c| c.name() == dependency.as_str()))
            .flat_map(|dependency| dependency.files())
            .filter(|sibling| sibling.kind().is_library())
            .map(|sibling| ProjectReference {
                name: sibling.name().to_string(),
                include: windows_path(["..", sibling.name(), sibling.file_name()]),
                guid: sibling.guid().to_string(),
            })
            .collect();

        let mut output_directory = from_root(&[config.bin_directory.as_str()]);
        output_directory.push('\\');

        Self {
            name: file.name().to_string(),
            guid: file.guid().to_string(),
            configuration_type: configuration_type(file.kind(), config.linkage),
            toolset: config.toolchain.platform_toolset(),
            platform: config.platform_name(),
            output_directory,
            sources: file.config().sources.iter().map(|s| from_root(&[folder, s.as_str()])).collect(),
            includes: file.config().includes.iter().map(|i| from_root(&[folder, i.as_str()])).collect(),
            defines: file.effective_defines(config),
            references,
        }
    }
}

fn configuration_type(kind: FileKind, linkage: Linkage) -> &'static str {
    match (kind, linkage) {
        (FileKind::Exe, _) => "Application",
        (FileKind::Dll, Linkage::Dynamic) => "DynamicLibrary",
        _ => "StaticLibrary",
    }
}
