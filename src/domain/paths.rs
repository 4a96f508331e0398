//! Type-safe path catalog for the project tree.
//!
//! Logical paths are written with `\` or `/` separators and always resolved
//! against the project root through [`ProjectRoot`].

use std::path::{Path, PathBuf};

/// Discovery roots as `(config folder, files folder)` pairs, in discovery order.
pub const ROOT_FOLDERS: [(&str, &str); 3] = [
    ("Dependencies", "Dependencies"),
    ("OptionalDependencies", "OptionalDependencies"),
    ("Projects", "ImageMagick"),
];

/// Component manifest file name inside a config folder.
pub const MANIFEST_FILENAME: &str = "project.toml";

/// Generator configuration file name at the project root.
pub const CONFIG_FILENAME: &str = "configure.yml";

/// Resolves logical paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical path, accepting both `\` and `/` separators.
    pub fn path_from_root(&self, logical: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in split_logical(logical) {
            path.push(part);
        }
        path
    }

    /// Folder holding the core library sources: `MagickCore` when present, otherwise `magick`.
    pub fn magick_folder_name(&self) -> &'static str {
        if self.path_from_root("ImageMagick\\MagickCore").is_dir() { "MagickCore" } else { "magick" }
    }

    /// `Visual<solution>.sln`
    pub fn solution_file(&self, solution_name: &str) -> PathBuf {
        self.path_from_root(&format!("Visual{}.sln", solution_name))
    }

    /// `<solution>\<file name>\<project file>`
    pub fn project_file(&self, solution_name: &str, name: &str, file_name: &str) -> PathBuf {
        self.path_from_root(&format!("{}\\{}\\{}", solution_name, name, file_name))
    }

    /// `Projects\<folder>\magick-baseconfig.h.in`
    pub fn base_config_template(&self, folder: &str) -> PathBuf {
        self.path_from_root(&format!("Projects\\{}\\magick-baseconfig.h.in", folder))
    }

    /// `ImageMagick\<folder>\magick-baseconfig.h`
    pub fn base_config(&self, folder: &str) -> PathBuf {
        self.path_from_root(&format!("ImageMagick\\{}\\magick-baseconfig.h", folder))
    }

    /// `ImageMagick\config\<profile file>`
    pub fn policy_source(&self, file_name: &str) -> PathBuf {
        self.path_from_root(&format!("ImageMagick\\config\\{}", file_name))
    }

    /// A file inside the configured output binary directory.
    pub fn bin_file(&self, bin_directory: &str, file_name: &str) -> PathBuf {
        self.path_from_root(bin_directory).join(file_name)
    }

    /// `ImageMagick\<folder>\threshold-map.h`
    pub fn threshold_map(&self, folder: &str) -> PathBuf {
        self.path_from_root(&format!("ImageMagick\\{}\\threshold-map.h", folder))
    }

    /// `ImageMagick\PerlMagick\<name>`
    pub fn perl_magick_output(&self, file_name: &str) -> PathBuf {
        self.path_from_root(&format!("ImageMagick\\PerlMagick\\{}", file_name))
    }

    /// `VisualMagick\PerlMagick\<name>`
    pub fn perl_magick_source(&self, file_name: &str) -> PathBuf {
        self.path_from_root(&format!("VisualMagick\\PerlMagick\\{}", file_name))
    }

    /// `ImageMagick\LICENSE`
    pub fn product_license(&self) -> PathBuf {
        self.path_from_root("ImageMagick\\LICENSE")
    }

    /// `VisualMagick\NOTICE.txt`
    pub fn notice(&self) -> PathBuf {
        self.path_from_root("VisualMagick\\NOTICE.txt")
    }

    /// `VisualMagick\version.toml`
    pub fn version_metadata(&self) -> PathBuf {
        self.path_from_root("VisualMagick\\version.toml")
    }

    /// The four `(template, output)` pairs rendered by the version writer.
    pub fn version_templates(&self, folder: &str, bin_directory: &str) -> [(PathBuf, PathBuf); 4] {
        [
            (
                self.path_from_root(&format!("ImageMagick\\{}\\version.h.in", folder)),
                self.path_from_root(&format!("ImageMagick\\{}\\version.h", folder)),
            ),
            (
                self.path_from_root("ImageMagick\\config\\configure.xml.in"),
                self.bin_file(bin_directory, "configure.xml"),
            ),
            (
                self.path_from_root("VisualMagick\\installer\\inc\\version.isx.in"),
                self.path_from_root("VisualMagick\\installer\\inc\\version.isx"),
            ),
            (
                self.path_from_root("VisualMagick\\utilities\\ImageMagick.version.h.in"),
                self.path_from_root("VisualMagick\\utilities\\ImageMagick.version.h"),
            ),
        ]
    }
}

/// Split a logical path on either separator, dropping empty segments.
pub fn split_logical(logical: &str) -> impl Iterator<Item = &str> {
    logical.split(['\\', '/']).filter(|part| !part.is_empty())
}

/// Join logical segments with the Windows separator used inside generated files.
pub fn windows_path<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for part in parts {
        for segment in split_logical(part.as_ref()).filter(|segment| *segment != ".") {
            if !joined.is_empty() {
                joined.push('\\');
            }
            joined.push_str(segment);
        }
    }
    if joined.is_empty() {
        joined.push('.');
    }
    joined
}
