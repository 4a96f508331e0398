//! slngen: generate Visual Studio solutions, project files and companion build
//! artifacts from a component tree and a build configuration.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

pub use app::commands::generate::{GenerationReport, SolutionGenerator};
pub use app::commands::list::ComponentSummary;
pub use app::{AppContext, FilesystemContext};
pub use domain::{AppError, Configuration, ProjectRoot};
pub use ports::{NoopProgress, ProgressSink};

use adapters::FilesystemProjectSource;
use app::config::{load_config, resolve_config_path};

/// Write the default `configure.yml` into `root`.
pub fn init(root: &Path) -> Result<PathBuf, AppError> {
    app::commands::init::execute(root)
}

/// Run a full generation over `root`.
///
/// `config` defaults to `<root>/configure.yml`.
pub fn generate(
    root: &Path,
    config: Option<&Path>,
    progress: &mut dyn ProgressSink,
) -> Result<GenerationReport, AppError> {
    let config = load_config(&resolve_config_path(root, config))?;
    let ctx = FilesystemContext::filesystem(ProjectRoot::new(root), config)?;
    let mut generator = SolutionGenerator::new(ctx);
    generator.load_projects();
    generator.write(progress)
}

/// Summarize the components discovered below `root` for a configuration.
pub fn list(root: &Path, config: Option<&Path>) -> Result<Vec<ComponentSummary>, AppError> {
    let config = load_config(&resolve_config_path(root, config))?;
    Ok(app::commands::list::execute(&ProjectRoot::new(root), &config, &FilesystemProjectSource::new()))
}
