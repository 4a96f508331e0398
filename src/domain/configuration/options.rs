//! Enumerated build options selected for a generation run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual Studio toolchain the solution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainVersion {
    Vs2017,
    Vs2019,
    Vs2022,
}

impl ToolchainVersion {
    pub fn label(self) -> &'static str {
        match self {
            ToolchainVersion::Vs2017 => "vs2017",
            ToolchainVersion::Vs2019 => "vs2019",
            ToolchainVersion::Vs2022 => "vs2022",
        }
    }

    /// Human-readable product name, e.g. `Visual Studio 2022`.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolchainVersion::Vs2017 => "Visual Studio 2017",
            ToolchainVersion::Vs2019 => "Visual Studio 2019",
            ToolchainVersion::Vs2022 => "Visual Studio 2022",
        }
    }

    /// MSBuild platform toolset.
    pub fn platform_toolset(self) -> &'static str {
        match self {
            ToolchainVersion::Vs2017 => "v141",
            ToolchainVersion::Vs2019 => "v142",
            ToolchainVersion::Vs2022 => "v143",
        }
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    X64,
    Arm64,
}

impl Architecture {
    /// Short platform alias used in solution configuration names.
    pub fn alias(self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X64 => "x64",
            Architecture::Arm64 => "arm64",
        }
    }

    /// MSBuild platform name.
    pub fn platform_name(self) -> &'static str {
        match self {
            Architecture::X86 => "Win32",
            Architecture::X64 => "x64",
            Architecture::Arm64 => "ARM64",
        }
    }
}

/// Bit width of a pixel quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuantumDepth {
    Q8,
    Q16,
    Q32,
    Q64,
}

impl QuantumDepth {
    pub fn bits(self) -> u8 {
        match self {
            QuantumDepth::Q8 => 8,
            QuantumDepth::Q16 => 16,
            QuantumDepth::Q32 => 32,
            QuantumDepth::Q64 => 64,
        }
    }
}

impl TryFrom<u8> for QuantumDepth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(QuantumDepth::Q8),
            16 => Ok(QuantumDepth::Q16),
            32 => Ok(QuantumDepth::Q32),
            64 => Ok(QuantumDepth::Q64),
            other => Err(format!("invalid quantum depth {}, expected 8, 16, 32 or 64", other)),
        }
    }
}

impl From<QuantumDepth> for u8 {
    fn from(depth: QuantumDepth) -> Self {
        depth.bits()
    }
}

/// Security policy profile installed next to the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyProfile {
    Limited,
    Open,
    Secure,
    Websafe,
}

impl PolicyProfile {
    /// Source profile file name under `ImageMagick/config`.
    pub fn file_name(self) -> &'static str {
        match self {
            PolicyProfile::Limited => "policy-limited.xml",
            PolicyProfile::Open => "policy-open.xml",
            PolicyProfile::Secure => "policy-secure.xml",
            PolicyProfile::Websafe => "policy-websafe.xml",
        }
    }
}

/// How the product libraries are linked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    #[default]
    Dynamic,
    Static,
}

impl Linkage {
    pub fn solution_name(self) -> &'static str {
        match self {
            Linkage::Dynamic => "DynamicMT",
            Linkage::Static => "StaticMT",
        }
    }
}

/// Optional product feature a component may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    InstalledSupport,
    Hdri,
    Opencl,
    DistributedCache,
    ExcludeDeprecated,
    ZeroConfiguration,
}
