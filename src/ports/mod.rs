mod progress;
mod project_renderer;
mod project_source;
mod version_source;

pub use progress::{NoopProgress, ProgressSink};
pub use project_renderer::ProjectRenderer;
pub use project_source::ProjectSource;
pub use version_source::VersionSource;
