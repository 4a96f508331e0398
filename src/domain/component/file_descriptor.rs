//! Generated project file owned by a component.

use std::path::Path;

use tracing::warn;

use crate::domain::paths::{split_logical, windows_path};
use crate::domain::{AppError, Configuration, FileKind, FileSpec, Linkage, ToolchainVersion};
use crate::ports::ProjectSource;

use super::guid::project_guid;

/// Extensions of files compiled into a project.
const COMPILE_EXTENSIONS: [&str; 4] = ["c", "cc", "cpp", "cxx"];

/// Build inputs of a project file, loaded lazily from the files folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFileConfig {
    /// Compile units, relative to the component files folder.
    pub sources: Vec<String>,
    pub includes: Vec<String>,
    pub defines: Vec<String>,
}

impl ProjectFileConfig {
    fn absorb(&mut self, other: ProjectFileConfig) {
        for source in other.sources {
            if !self.sources.contains(&source) {
                self.sources.push(source);
            }
        }
        for include in other.includes {
            if !self.includes.contains(&include) {
                self.includes.push(include);
            }
        }
        for define in other.defines {
            if !self.defines.contains(&define) {
                self.defines.push(define);
            }
        }
    }
}

/// One project file of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    name: String,
    file_name: String,
    guid: String,
    spec: FileSpec,
    config: Option<ProjectFileConfig>,
}

impl FileDescriptor {
    pub fn new(component: &str, spec: FileSpec, solution_name: &str) -> Self {
        Self {
            file_name: format!("{}_{}.vcxproj", spec.name, solution_name),
            guid: project_guid(component, &spec.name),
            name: spec.name.clone(),
            spec,
            config: None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generated file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn kind(&self) -> FileKind {
        self.spec.kind
    }

    pub fn merge_into(&self) -> Option<&str> {
        self.spec.merge_into.as_deref()
    }

    pub fn is_supported(&self, toolchain: ToolchainVersion) -> bool {
        self.spec.minimum_toolchain.is_none_or(|minimum| toolchain >= minimum)
    }

    /// Loaded build inputs; empty until [`FileDescriptor::load_config`] ran.
    pub fn config(&self) -> &ProjectFileConfig {
        static EMPTY: ProjectFileConfig =
            ProjectFileConfig { sources: Vec::new(), includes: Vec::new(), defines: Vec::new() };
        self.config.as_ref().unwrap_or(&EMPTY)
    }

    /// Scan the declared source directories below `files_folder`.
    ///
    /// A missing source directory contributes nothing.
    pub fn load_config<S: ProjectSource + ?Sized>(
        &mut self,
        files_folder: &Path,
        source: &S,
    ) -> Result<(), AppError> {
        let mut sources = Vec::new();
        for dir in &self.spec.sources {
            let segments: Vec<&str> = split_logical(dir).filter(|part| *part != ".").collect();
            let path = segments.iter().fold(files_folder.to_path_buf(), |path, part| path.join(part));
            if !source.is_dir(&path) {
                warn!(project = %self.name, directory = %dir, "source directory not found");
                continue;
            }
            for file in source.list_files(&path)? {
                if is_compile_unit(&file) {
                    sources.push(windows_path(segments.iter().copied().chain([file.as_str()])));
                }
            }
        }

        self.config = Some(ProjectFileConfig {
            sources,
            includes: self.spec.includes.clone(),
            defines: self.spec.defines.clone(),
        });
        Ok(())
    }

    /// Fold a satellite's build inputs into this file.
    pub fn absorb(&mut self, satellite: FileDescriptor) {
        let extra = satellite.config.unwrap_or_default();
        self.config.get_or_insert_with(ProjectFileConfig::default).absorb(extra);
    }

    /// Preprocessor definitions the generated project carries.
    pub fn effective_defines(&self, config: &Configuration) -> Vec<String> {
        let mut defines = Vec::new();
        match (self.kind(), config.linkage) {
            (FileKind::Dll, Linkage::Dynamic) => defines.push("_DLL".to_string()),
            (FileKind::Exe, _) => defines.push("_CONSOLE".to_string()),
            _ => defines.push("_LIB".to_string()),
        }
        defines.extend(self.config().defines.iter().cloned());
        defines
    }
}

fn is_compile_unit(file: &str) -> bool {
    Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPILE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}
