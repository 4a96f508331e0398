//! Fixture project tree shared by the integration tests.

/// `(relative path, content)` pairs of a small but complete project root.
pub(crate) const PROJECT_TREE: &[(&str, &str)] = &[
    (
        "Dependencies/zlib/project.toml",
        r##"version = "1.3"
licenses = ["LICENSE"]
config_define = "#define MAGICKCORE_ZLIB_DELEGATE"

[[files]]
name = "CORE_zlib"
kind = "lib"
sources = ["."]
includes = ["."]
"##,
    ),
    ("Dependencies/zlib/adler32.c", ""),
    ("Dependencies/zlib/LICENSE", "zlib license text\n"),
    (
        "Dependencies/jxl/project.toml",
        r##"minimum_toolchain = "vs2022"
config_define = "#define MAGICKCORE_JXL_DELEGATE"

[[files]]
name = "CORE_jxl"
sources = ["."]
"##,
    ),
    ("Dependencies/jxl/decode.cc", ""),
    (
        "OptionalDependencies/opencl/project.toml",
        r#"requires = ["opencl"]
licenses = ["LICENSE"]

[[files]]
name = "CORE_opencl"
"#,
    ),
    ("OptionalDependencies/opencl/LICENSE", "opencl license text\n"),
    (
        "Projects/MagickCore/project.toml",
        r#"dependencies = ["zlib"]

[[files]]
name = "CORE_MagickCore"
sources = ["."]
"#,
    ),
    (
        "Projects/MagickCore/magick-baseconfig.h.in",
        "#ifndef MAGICKCORE_MAGICK_BASECONFIG_H\n#define MAGICKCORE_MAGICK_BASECONFIG_H\n\n$$CONFIG$$\n\n#endif\n",
    ),
    ("ImageMagick/MagickCore/blob.c", ""),
    (
        "Projects/coders/project.toml",
        r#"dependencies = ["MagickCore"]

[[files]]
name = "CORE_coders"
sources = ["."]

[[files]]
name = "CORE_png_coder"
sources = ["png"]
merge_into = "CORE_coders"
"#,
    ),
    ("ImageMagick/coders/bmp.c", ""),
    ("ImageMagick/coders/png/png.c", ""),
    ("ImageMagick/config/policy-limited.xml", "<policymap limited/>\n"),
    ("ImageMagick/config/policy-open.xml", "<policymap open/>\n"),
    ("ImageMagick/config/policy-websafe.xml", "<policymap websafe/>\n"),
    ("ImageMagick/config/configure.xml.in", "<configure name=\"QuantumDepth\" value=\"@QUANTUM_DEPTH@\"/>\n"),
    (
        "ImageMagick/MagickCore/version.h.in",
        "#define MagickPackageName \"@PACKAGE_NAME@\"\n#define MagickLibVersionText \"@MAGICK_LIB_VERSION_TEXT@\"\n#define MagickSecurityPolicy \"@MAGICK_SECURITY_POLICY@\"\n",
    ),
    ("VisualMagick/installer/inc/version.isx.in", "#define MagickPackageFullVersionText \"@PACKAGE_FULL_VERSION@\"\n"),
    ("VisualMagick/utilities/ImageMagick.version.h.in", "#define MagickTargetCpu \"@MAGICK_TARGET_CPU@\"\n"),
    ("VisualMagick/PerlMagick/Zip.ps1", "Compress-Archive -Path PerlMagick\r\n"),
    ("VisualMagick/PerlMagick/Makefile.PL.in", "'LIBS' => ['-l$$LIB_NAME$$'], # $$PLATFORM$$\n"),
    ("ImageMagick/PerlMagick/.keep", ""),
    ("Artifacts/bin/thresholds.xml", "<thresholds>\n\n  <threshold map=\"threshold\">\n</thresholds>\n"),
    ("ImageMagick/LICENSE", "ImageMagick license text\n"),
    (
        "VisualMagick/version.toml",
        r#"major = 7
minor = 1
micro = 1
patchlevel = 15
library_current = 10
library_revision = 0
library_age = 0
magickpp_library_current = 5
magickpp_library_revision = 0
magickpp_library_age = 0
git_revision = "a1b2c3d"
release_date = "2023-08-14"
"#,
    ),
];

/// Build configuration used unless a test writes its own.
pub(crate) const DEFAULT_CONFIG: &str = "toolchain: vs2022\narchitecture: x64\n";
