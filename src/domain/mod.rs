pub mod artifacts;
pub mod component;
pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod paths;
pub mod project_model;
pub mod registry;
pub mod substitution;
pub mod version;

pub use component::{
    BuildUnit, Component, ComponentKind, ComponentManifest, FileDescriptor, FileKind, FileSpec,
    ProjectFileConfig, parse_manifest, project_guid,
};
pub use configuration::{
    Architecture, Configuration, Feature, Linkage, PolicyProfile, QuantumDepth, ToolchainVersion,
};
pub use error::AppError;
pub use identifiers::ComponentId;
pub use paths::ProjectRoot;
pub use project_model::{ProjectModel, ProjectReference};
pub use registry::ComponentRegistry;
pub use substitution::{DirectMap, LineOutcome};
pub use version::VersionMetadata;
