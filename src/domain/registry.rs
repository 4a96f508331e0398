//! Component discovery and support filtering.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppError, BuildUnit, Component, ComponentKind, Configuration};
use crate::ports::ProjectSource;

/// Components discovered under the configured root folders, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    components: Vec<Component>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover components below each `(config folder, files folder)` root.
    ///
    /// Only immediate subdirectories are considered. Directories without a
    /// manifest, malformed manifests and duplicate names are skipped.
    pub fn discover(
        &mut self,
        root: &Path,
        root_folders: &[(&str, &str)],
        source: &dyn ProjectSource,
    ) {
        for (config_folder, files_folder) in root_folders {
            let folder_path = root.join(config_folder);
            let dirs = match source.list_dirs(&folder_path) {
                Ok(dirs) => dirs,
                Err(err) => {
                    debug!(folder = %config_folder, error = %err, "discovery root skipped");
                    continue;
                }
            };

            let kind = ComponentKind::from_config_folder(config_folder);
            for dir_name in dirs {
                let config_dir = folder_path.join(&dir_name);
                match Self::create(kind, files_folder, root, &config_dir, &dir_name, source) {
                    Ok(Some(component)) => self.register(component),
                    Ok(None) => debug!(folder = %config_folder, directory = %dir_name, "no manifest"),
                    Err(err) => warn!(directory = %dir_name, error = %err, "component skipped"),
                }
            }
        }
    }

    fn create(
        kind: ComponentKind,
        files_folder: &str,
        root: &Path,
        config_dir: &Path,
        dir_name: &str,
        source: &dyn ProjectSource,
    ) -> Result<Option<Component>, AppError> {
        let Some(manifest) = source.read_manifest(config_dir)? else {
            return Ok(None);
        };
        Component::from_manifest(kind, files_folder, root, dir_name, manifest).map(Some)
    }

    fn register(&mut self, component: Component) {
        if self.get(component.name()).is_some() {
            warn!(component = component.name(), "duplicate component skipped");
            return;
        }
        debug!(component = component.name(), kind = component.kind().label(), "discovered");
        self.components.push(component);
    }

    /// Load the file sets of every component supported by the configured toolchain.
    ///
    /// Returns the number of project files loaded. A component failing to load
    /// is left without files and the pass continues.
    pub fn load_supported(&mut self, config: &Configuration, source: &dyn ProjectSource) -> usize {
        let mut count = 0;
        for component in &mut self.components {
            if !component.is_supported(config.toolchain) {
                debug!(component = component.name(), toolchain = %config.toolchain, "not supported");
                component.clear_files();
                continue;
            }

            match component.load_files(config, source) {
                Ok(true) => {}
                Ok(false) => {
                    debug!(component = component.name(), "skipped for configuration");
                    continue;
                }
                Err(err) if component.kind().is_optional() => {
                    debug!(component = component.name(), error = %err, "optional component skipped");
                    continue;
                }
                Err(err) => {
                    warn!(component = component.name(), error = %err, "component skipped");
                    continue;
                }
            }

            match component.load_file_configs(source) {
                Ok(loaded) => count += loaded,
                Err(err) => {
                    warn!(component = component.name(), error = %err, "component skipped");
                    component.clear_files();
                    continue;
                }
            }

            component.check_files(config.toolchain);
            component.merge_project_files(config);
        }
        count.saturating_sub(self.drop_duplicate_projects())
    }

    /// Drop project files whose name an earlier component already claimed.
    ///
    /// Returns the number of files dropped.
    fn drop_duplicate_projects(&mut self) -> usize {
        let mut seen: Vec<String> = Vec::new();
        let mut dropped = 0;
        for component in &mut self.components {
            let owner = component.name().to_string();
            component.retain_files(|file| {
                if seen.iter().any(|name| name == file.name()) {
                    warn!(component = %owner, project = file.name(), "project name already taken, dropped");
                    dropped += 1;
                    return false;
                }
                seen.push(file.name().to_string());
                true
            });
        }
        dropped
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|component| component.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
