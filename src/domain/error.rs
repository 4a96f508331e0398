use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for slngen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project root does not exist or is not a directory.
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Configuration file missing.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration file already present.
    #[error("Configuration file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// Component identifier is invalid.
    #[error(
        "Invalid component identifier '{0}': must be alphanumeric with '-', '_', '+' or '.'"
    )]
    InvalidComponentId(String),

    /// Component metadata is invalid.
    #[error("Invalid component metadata for '{component}': {reason}")]
    InvalidComponentMetadata { component: String, reason: String },

    /// Component files could not be loaded.
    #[error("Unable to load files for component '{component}': {reason}")]
    ComponentLoad { component: String, reason: String },

    /// A template line still carries a token outside the known vocabulary.
    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    /// The selected policy profile is missing.
    #[error("Unable to open policy file: {}", .0.display())]
    PolicyFileUnavailable(PathBuf),

    /// Template registration or rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
