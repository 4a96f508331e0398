//! List command: discovered components and their status for a configuration.

use serde::Serialize;

use crate::domain::paths::ROOT_FOLDERS;
use crate::domain::{BuildUnit, ComponentRegistry, Configuration, ProjectRoot};
use crate::ports::ProjectSource;

/// Summary information for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub kind: &'static str,
    pub supported: bool,
    pub skipped: bool,
    /// Project files generated for the configuration.
    pub files: Vec<String>,
}

/// Discover and load every component, summarizing each one.
pub fn execute(
    root: &ProjectRoot,
    config: &Configuration,
    source: &dyn ProjectSource,
) -> Vec<ComponentSummary> {
    let mut registry = ComponentRegistry::new();
    registry.discover(root.as_path(), &ROOT_FOLDERS, source);
    registry.load_supported(config, source);

    registry
        .components()
        .iter()
        .map(|component| ComponentSummary {
            name: component.name().to_string(),
            kind: component.kind().label(),
            supported: component.is_supported(config.toolchain),
            skipped: component.should_skip(config),
            files: component.files().iter().map(|file| file.file_name().to_string()).collect(),
        })
        .collect()
}
