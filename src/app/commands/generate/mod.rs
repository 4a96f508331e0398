//! Solution generation: discovery, filtering and every output artifact.

mod artifacts;
mod projects;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::paths::ROOT_FOLDERS;
use crate::domain::{AppError, ComponentRegistry};
use crate::ports::{ProgressSink, ProjectRenderer, ProjectSource, VersionSource};

/// Steps reported besides the per-file ones.
const FIXED_STEPS: usize = 4;

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub solution_file: PathBuf,
    /// Project files loaded by the discovery pass.
    pub loaded_files: usize,
    pub projects_written: usize,
    /// False when the run stopped early without error.
    pub completed: bool,
}

/// Drives a generation run over one project root.
pub struct SolutionGenerator<S: ProjectSource, V: VersionSource, R: ProjectRenderer> {
    ctx: AppContext<S, V, R>,
    registry: ComponentRegistry,
}

impl<S: ProjectSource, V: VersionSource, R: ProjectRenderer> SolutionGenerator<S, V, R> {
    pub fn new(ctx: AppContext<S, V, R>) -> Self {
        Self { ctx, registry: ComponentRegistry::new() }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Discover every component below the root folders.
    pub fn load_projects(&mut self) {
        self.registry = ComponentRegistry::new();
        self.registry.discover(self.ctx.root().as_path(), &ROOT_FOLDERS, self.ctx.source());
    }

    /// Load, filter and merge the discovered components, then write every artifact.
    ///
    /// Only an unknown template keyword and a missing policy profile fail the
    /// run. Every other problem skips the affected output.
    pub fn write(&mut self, progress: &mut dyn ProgressSink) -> Result<GenerationReport, AppError> {
        let config = self.ctx.config();
        let root = self.ctx.root();

        let loaded_files = self.registry.load_supported(config, self.ctx.source());
        progress.set_total_steps(loaded_files + FIXED_STEPS);

        let mut report = GenerationReport {
            solution_file: root.solution_file(config.solution_name()),
            loaded_files,
            projects_written: 0,
            completed: false,
        };

        if !projects::write_solution(&report.solution_file, config, &self.registry, progress) {
            return Ok(report);
        }
        report.projects_written = projects::write_project_files(&self.ctx, &self.registry, progress)?;

        let magick_folder = root.magick_folder_name();

        progress.advance("Writing configuration");
        artifacts::write_base_config(root, config, &self.registry, magick_folder);

        progress.advance("Writing threshold-map.h");
        artifacts::write_threshold_map(root, config, magick_folder);

        progress.advance("Writing Makefile.PL");
        artifacts::write_makefile(root, config, magick_folder);

        progress.advance("Writing policy config");
        artifacts::write_policy_config(root, config)?;

        let version = match self.ctx.versions().load() {
            Ok(version) => version,
            Err(err) => {
                warn!(error = %err, "version metadata unavailable, skipping version files and notice");
                return Ok(report);
            }
        };

        progress.advance("Writing version");
        artifacts::write_version_files(root, config, &version, magick_folder)?;

        progress.advance("Writing NOTICE.txt");
        artifacts::write_notice(root, config, &self.registry, &version);

        info!(
            solution = %report.solution_file.display(),
            projects = report.projects_written,
            "generation finished"
        );
        report.completed = true;
        Ok(report)
    }
}
