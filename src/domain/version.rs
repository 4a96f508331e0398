//! Product version record used by the version and notice artifacts.

/// Flat set of version strings for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMetadata {
    /// Base version, e.g. `7.1.0`.
    pub version: String,
    /// Full version including the patch level, e.g. `7.1.0-10`.
    pub full_version: String,
    /// Packed library version, e.g. `0x710`.
    pub lib_version: String,
    /// MagickCore library version number (`current,revision,age`).
    pub lib_version_number: String,
    /// Package version number (`major,minor,micro,patchlevel`).
    pub version_number: String,
    /// MagickCore interface version.
    pub interface_version: String,
    /// Magick++ interface version.
    pub pp_interface_version: String,
    /// Magick++ library version info (`current:revision:age`).
    pub pp_lib_version_number: String,
    pub git_revision: String,
    pub release_date: String,
    /// Suffix appended to the version in human-facing text, e.g. `-10`.
    pub lib_addendum: String,
}
