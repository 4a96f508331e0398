//! Finalized build configuration driving a generation run.

mod options;

pub use options::{
    Architecture, Feature, Linkage, PolicyProfile, QuantumDepth, ToolchainVersion,
};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Build options collected before generation starts.
///
/// Constructed once (usually from `configure.yml`) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// Visual Studio toolchain.
    pub toolchain: ToolchainVersion,
    /// Target architecture.
    pub architecture: Architecture,
    /// Pixel quantum depth.
    #[serde(default = "default_quantum_depth")]
    pub quantum_depth: QuantumDepth,
    /// Library linkage.
    #[serde(default)]
    pub linkage: Linkage,
    /// Locate installed components through registry settings or hard-coded paths.
    #[serde(default)]
    pub installed_support: bool,
    /// High dynamic range imagery.
    #[serde(default = "default_true")]
    pub hdri: bool,
    /// GPU offload through OpenCL.
    #[serde(default)]
    pub opencl: bool,
    /// Distributed pixel cache.
    #[serde(default)]
    pub distributed_cache: bool,
    /// Exclude deprecated API methods.
    #[serde(default)]
    pub exclude_deprecated: bool,
    /// Only use built-in (in-memory) settings.
    #[serde(default)]
    pub zero_configuration: bool,
    /// Security policy profile.
    #[serde(default = "default_policy")]
    pub policy: PolicyProfile,
    /// Output binary directory, relative to the project root.
    #[serde(default = "default_bin_directory")]
    pub bin_directory: String,
    /// Channel mask depth; empty when the feature is absent.
    #[serde(default)]
    pub channel_mask_depth: String,
}

impl Configuration {
    /// Minimal configuration for a toolchain and architecture; every other option takes its default.
    pub fn new(toolchain: ToolchainVersion, architecture: Architecture) -> Self {
        Self {
            toolchain,
            architecture,
            quantum_depth: default_quantum_depth(),
            linkage: Linkage::default(),
            installed_support: false,
            hdri: true,
            opencl: false,
            distributed_cache: false,
            exclude_deprecated: false,
            zero_configuration: false,
            policy: default_policy(),
            bin_directory: default_bin_directory(),
            channel_mask_depth: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.bin_directory.trim().is_empty() {
            return Err(AppError::config_error("bin_directory must not be empty"));
        }
        if !self.channel_mask_depth.is_empty()
            && !self.channel_mask_depth.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AppError::config_error(format!(
                "channel_mask_depth must be numeric, got '{}'",
                self.channel_mask_depth
            )));
        }
        Ok(())
    }

    pub fn platform_alias(&self) -> &'static str {
        self.architecture.alias()
    }

    pub fn platform_name(&self) -> &'static str {
        self.architecture.platform_name()
    }

    pub fn solution_name(&self) -> &'static str {
        self.linkage.solution_name()
    }

    /// Channel mask depth, `None` when the feature is absent.
    pub fn channel_mask_depth(&self) -> Option<&str> {
        let depth = self.channel_mask_depth.trim();
        if depth.is_empty() { None } else { Some(depth) }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::InstalledSupport => self.installed_support,
            Feature::Hdri => self.hdri,
            Feature::Opencl => self.opencl,
            Feature::DistributedCache => self.distributed_cache,
            Feature::ExcludeDeprecated => self.exclude_deprecated,
            Feature::ZeroConfiguration => self.zero_configuration,
        }
    }
}

fn default_quantum_depth() -> QuantumDepth {
    QuantumDepth::Q16
}

fn default_true() -> bool {
    true
}

fn default_policy() -> PolicyProfile {
    PolicyProfile::Open
}

fn default_bin_directory() -> String {
    "Artifacts\\bin\\".to_string()
}
