//! Token values for the version templates.

use crate::domain::substitution::DirectMap;
use crate::domain::{Configuration, VersionMetadata};

const PACKAGE_NAME: &str = "ImageMagick";
const TARGET_OS: &str = "Windows";

/// Direct substitutions applied to every version template, in order.
pub fn version_map(version: &VersionMetadata, config: &Configuration) -> DirectMap {
    let compiler = config.toolchain.display_name();
    DirectMap::new()
        .with("CC", compiler)
        .with("CHANNEL_MASK_DEPTH", config.channel_mask_depth().unwrap_or_default())
        .with("CXX", compiler)
        .with("DOCUMENTATION_PATH", "unavailable")
        .with("LIB_VERSION", version.version.as_str())
        .with("MAGICK_GIT_REVISION", version.git_revision.as_str())
        .with("MAGICK_LIB_VERSION_NUMBER", version.lib_version_number.as_str())
        .with("MAGICK_LIB_VERSION_TEXT", version.version.as_str())
        .with("MAGICK_LIBRARY_CURRENT", version.interface_version.as_str())
        .with("MAGICK_LIBRARY_CURRENT_MIN", version.interface_version.as_str())
        .with("MAGICK_TARGET_CPU", config.platform_alias())
        .with("MAGICK_TARGET_OS", TARGET_OS)
        .with("MAGICKPP_LIB_VERSION_TEXT", version.version.as_str())
        .with("MAGICKPP_LIBRARY_CURRENT", version.pp_interface_version.as_str())
        .with("MAGICKPP_LIBRARY_CURRENT_MIN", version.pp_interface_version.as_str())
        .with("MAGICKPP_LIBRARY_VERSION_INFO", version.pp_lib_version_number.as_str())
        .with("MAGICKPP_LIBRARY_VERSION_TEXT", version.version.as_str())
        .with("PACKAGE_BASE_VERSION", version.version.as_str())
        .with("PACKAGE_FULL_VERSION", version.full_version.as_str())
        .with("PACKAGE_LIB_VERSION", version.lib_version.as_str())
        .with("PACKAGE_LIB_VERSION_NUMBER", version.version_number.as_str())
        .with("PACKAGE_NAME", PACKAGE_NAME)
        .with("PACKAGE_VERSION_ADDENDUM", version.lib_addendum.as_str())
        .with("PACKAGE_RELEASE_DATE", version.release_date.as_str())
        .with("QUANTUM_DEPTH", config.quantum_depth.bits().to_string())
        .with("RELEASE_DATE", version.release_date.as_str())
        .with("TARGET_OS", TARGET_OS)
}
