use crate::adapters::{FilesystemProjectSource, MinijinjaProjectRenderer, TomlVersionSource};
use crate::domain::{AppError, Configuration, ProjectRoot};
use crate::ports::{ProjectRenderer, ProjectSource, VersionSource};

/// Application context holding dependencies for a generation run.
pub struct AppContext<S: ProjectSource, V: VersionSource, R: ProjectRenderer> {
    root: ProjectRoot,
    config: Configuration,
    source: S,
    versions: V,
    renderer: R,
}

impl<S: ProjectSource, V: VersionSource, R: ProjectRenderer> AppContext<S, V, R> {
    /// Create a new application context.
    pub fn new(root: ProjectRoot, config: Configuration, source: S, versions: V, renderer: R) -> Self {
        Self { root, config, source, versions, renderer }
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn versions(&self) -> &V {
        &self.versions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Context reading the project tree from disk.
pub type FilesystemContext =
    AppContext<FilesystemProjectSource, TomlVersionSource, MinijinjaProjectRenderer>;

impl FilesystemContext {
    /// Wire the filesystem adapters for `root`.
    pub fn filesystem(root: ProjectRoot, config: Configuration) -> Result<Self, AppError> {
        let versions = TomlVersionSource::new(root.version_metadata());
        Ok(Self::new(
            root,
            config,
            FilesystemProjectSource::new(),
            versions,
            MinijinjaProjectRenderer::new()?,
        ))
    }
}
