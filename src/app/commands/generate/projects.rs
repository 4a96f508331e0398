//! Solution descriptor and component project files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::artifacts::render_solution;
use crate::domain::{AppError, BuildUnit, ComponentRegistry, Configuration, ProjectModel};
use crate::ports::{ProgressSink, ProjectRenderer, ProjectSource, VersionSource};

/// Write `Visual<solution>.sln`.
///
/// Returns false when the file cannot be created.
pub(super) fn write_solution(
    path: &Path,
    config: &Configuration,
    registry: &ComponentRegistry,
    progress: &mut dyn ProgressSink,
) -> bool {
    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unable to create solution file");
            return false;
        }
    };

    progress.advance("Writing solution");
    let files: Vec<_> = registry.components().iter().flat_map(|c| c.files()).collect();
    if let Err(err) = file.write_all(render_solution(config, &files).as_bytes()) {
        warn!(path = %path.display(), error = %err, "solution file incomplete");
    }
    true
}

/// Write the project file of every loaded component file.
///
/// Returns the number of project files written.
pub(super) fn write_project_files<S: ProjectSource, V: VersionSource, R: ProjectRenderer>(
    ctx: &AppContext<S, V, R>,
    registry: &ComponentRegistry,
    progress: &mut dyn ProgressSink,
) -> Result<usize, AppError> {
    let config = ctx.config();
    let components = registry.components();
    let mut written = 0;

    for component in components {
        for file in component.files() {
            progress.advance(&format!("Writing: {}", file.file_name()));

            let model = ProjectModel::build(component, file, components, config);
            let content = ctx.renderer().render(&model)?;
            let path = ctx.root().project_file(config.solution_name(), file.name(), file.file_name());

            if let Err(err) = write_creating_dirs(&path, &content) {
                warn!(path = %path.display(), error = %err, "project file skipped");
                continue;
            }
            debug!(component = component.name(), project = file.name(), "project file written");
            written += 1;
        }
    }
    Ok(written)
}

fn write_creating_dirs(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
