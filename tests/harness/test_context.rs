//! Shared testing harness for `slngen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::project_tree::{DEFAULT_CONFIG, PROJECT_TREE};

/// Testing harness providing an isolated project root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an empty project root.
    pub(crate) fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a project root populated with the fixture tree and default configuration.
    pub(crate) fn new() -> Self {
        let ctx = Self::empty();
        for (path, content) in PROJECT_TREE {
            ctx.write(path, content);
        }
        ctx.write_config(DEFAULT_CONFIG);
        ctx
    }

    /// Absolute path of the project root.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file below the root, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub(crate) fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).expect("Failed to remove fixture file");
    }

    /// Replace `configure.yml`.
    pub(crate) fn write_config(&self, yaml: &str) {
        self.write("configure.yml", yaml);
    }

    /// Build a command for invoking the compiled `slngen` binary within the root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("slngen").expect("Failed to locate slngen binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }

    /// Run `slngen generate` and assert success.
    pub(crate) fn generate(&self) {
        self.cli().arg("generate").assert().success();
    }

    /// Assert that a generated file exists.
    pub(crate) fn assert_exists(&self, relative: &str) {
        assert!(self.exists(relative), "{} should exist", relative);
    }

    /// Assert that a generated file does not exist.
    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.exists(relative), "{} should not exist", relative);
    }
}
