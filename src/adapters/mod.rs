pub mod filesystem;
pub mod progress_console;
pub mod project_renderer;
pub mod version_toml;

pub use filesystem::FilesystemProjectSource;
pub use progress_console::ConsoleProgress;
pub use project_renderer::MinijinjaProjectRenderer;
pub use version_toml::{TomlVersionSource, parse_version};
