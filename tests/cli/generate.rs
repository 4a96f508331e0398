use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_writes_solution_projects_and_artifacts() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("] Writing solution"))
        .stdout(predicate::str::contains("Writing: CORE_zlib_DynamicMT.vcxproj"))
        .stdout(predicate::str::contains("✅ Generated VisualDynamicMT.sln with 5 project(s)"));

    for output in [
        "VisualDynamicMT.sln",
        "DynamicMT/CORE_zlib/CORE_zlib_DynamicMT.vcxproj",
        "DynamicMT/CORE_jxl/CORE_jxl_DynamicMT.vcxproj",
        "DynamicMT/CORE_MagickCore/CORE_MagickCore_DynamicMT.vcxproj",
        "DynamicMT/CORE_coders/CORE_coders_DynamicMT.vcxproj",
        "DynamicMT/CORE_png_coder/CORE_png_coder_DynamicMT.vcxproj",
        "ImageMagick/MagickCore/magick-baseconfig.h",
        "ImageMagick/PerlMagick/CORE_RL_MagickCore_.a",
        "ImageMagick/PerlMagick/Zip.ps1",
        "ImageMagick/PerlMagick/Makefile.PL",
        "Artifacts/bin/policy.xml",
        "Artifacts/bin/configure.xml",
        "ImageMagick/MagickCore/version.h",
        "VisualMagick/installer/inc/version.isx",
        "VisualMagick/utilities/ImageMagick.version.h",
        "VisualMagick/NOTICE.txt",
    ] {
        ctx.assert_exists(output);
    }
    ctx.assert_not_exists("DynamicMT/CORE_opencl");
    ctx.assert_not_exists("ImageMagick/MagickCore/threshold-map.h");

    let solution = ctx.read("VisualDynamicMT.sln");
    assert!(solution.starts_with("Microsoft Visual Studio Solution File, Format Version 12.00\r\n"));
    assert!(solution.contains("\t\tRelease|x64 = Release|x64\r\n"));
    assert!(!solution.contains("CORE_opencl"));

    assert_eq!(ctx.read("Artifacts/bin/policy.xml"), "<policymap open/>\n");
    assert_eq!(ctx.read("ImageMagick/PerlMagick/Zip.ps1"), "Compress-Archive -Path PerlMagick\r\n");
    assert_eq!(
        ctx.read("ImageMagick/PerlMagick/Makefile.PL"),
        "'LIBS' => ['-lCORE_RL_MagickCore_'], # x64\n"
    );
    assert_eq!(
        ctx.read("ImageMagick/MagickCore/version.h"),
        "#define MagickPackageName \"ImageMagick\"\n#define MagickLibVersionText \"7.1.1\"\n"
    );
    assert_eq!(
        ctx.read("VisualMagick/installer/inc/version.isx"),
        "#define MagickPackageFullVersionText \"7.1.1-15\"\n"
    );
}

#[test]
fn sixteen_bit_build_without_hdri() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2022\narchitecture: x64\nquantum_depth: 16\nhdri: false\n");

    ctx.generate();

    let header = ctx.read("ImageMagick/MagickCore/magick-baseconfig.h");
    assert!(header.starts_with("#ifndef MAGICKCORE_MAGICK_BASECONFIG_H\n"));
    assert!(header.contains("#define MAGICKCORE_QUANTUM_DEPTH 16\n"));
    assert!(header.contains("#define MAGICKCORE_HDRI_ENABLE 0\n"));
    assert!(header.contains("#define MAGICKCORE_ZLIB_DELEGATE\n"));
    assert!(!header.contains("$$CONFIG$$"));
    assert_eq!(ctx.read("Artifacts/bin/configure.xml"), "<configure name=\"QuantumDepth\" value=\"16\"/>\n");
}

#[test]
fn zero_configuration_controls_threshold_map() {
    let ctx = TestContext::new();
    ctx.generate();
    ctx.assert_not_exists("ImageMagick/MagickCore/threshold-map.h");

    ctx.write_config("toolchain: vs2022\narchitecture: x64\nzero_configuration: true\n");
    ctx.generate();

    assert_eq!(
        ctx.read("ImageMagick/MagickCore/threshold-map.h"),
        "static const char *const BuiltinMap=\n\"<thresholds>\"\n\"  <threshold map=\\\"threshold\\\">\"\n\"</thresholds>\"\n;"
    );
    assert!(
        ctx.read("ImageMagick/MagickCore/magick-baseconfig.h")
            .contains("#define MAGICKCORE_ZERO_CONFIGURATION_SUPPORT 1\n")
    );
}

#[test]
fn missing_policy_profile_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2022\narchitecture: x64\npolicy: secure\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unable to open policy file"))
        .stderr(predicate::str::contains("policy-secure.xml"));

    ctx.assert_not_exists("Artifacts/bin/policy.xml");
    ctx.assert_not_exists("VisualMagick/NOTICE.txt");
}

#[test]
fn unknown_template_keyword_is_fatal() {
    let ctx = TestContext::new();
    ctx.write("ImageMagick/config/configure.xml.in", "@PACKAGE_NAME@-@UNKNOWN_TOKEN@\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid keyword: UNKNOWN_TOKEN"));

    ctx.assert_not_exists("Artifacts/bin/configure.xml");
}

#[test]
fn unsupported_component_is_absent_from_solution() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2017\narchitecture: x86\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Generated VisualDynamicMT.sln with 4 project(s)"));

    let solution = ctx.read("VisualDynamicMT.sln");
    assert!(solution.contains("# Visual Studio 2017\r\n"));
    assert!(!solution.contains("CORE_jxl"));
    assert!(solution.contains(".Debug|x86.ActiveCfg = Debug|Win32\r\n"));
    assert!(!ctx.read("ImageMagick/MagickCore/magick-baseconfig.h").contains("JXL_DELEGATE"));
}

#[test]
fn static_linkage_merges_satellite_projects() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2022\narchitecture: x64\nlinkage: static\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Generated VisualStaticMT.sln with 4 project(s)"));

    let solution = ctx.read("VisualStaticMT.sln");
    assert!(solution.contains("\"CORE_coders\""));
    assert!(!solution.contains("CORE_png_coder"));

    let coders = ctx.read("StaticMT/CORE_coders/CORE_coders_StaticMT.vcxproj");
    assert!(coders.contains("<ClCompile Include=\"..\\..\\ImageMagick\\coders\\bmp.c\" />"));
    assert!(coders.contains("<ClCompile Include=\"..\\..\\ImageMagick\\coders\\png\\png.c\" />"));
    assert!(coders.contains("<ConfigurationType>StaticLibrary</ConfigurationType>"));
}

#[test]
fn notice_aggregates_licenses_of_built_components() {
    let ctx = TestContext::new();
    ctx.generate();

    let notice = ctx.read("VisualMagick/NOTICE.txt");
    assert!(notice.contains("[ ImageMagick 7.1.1-15 ] copyright:\n\nImageMagick license text\n"));
    assert!(notice.contains("[ zlib 1.3 ] copyright:\n\nzlib license text\n"));
    assert!(!notice.contains("opencl license text"));

    ctx.write_config("toolchain: vs2022\narchitecture: x64\nopencl: true\n");
    ctx.generate();
    assert!(ctx.read("VisualMagick/NOTICE.txt").contains("opencl license text"));
}

#[test]
fn missing_version_metadata_stops_quietly() {
    let ctx = TestContext::new();
    ctx.remove("VisualMagick/version.toml");

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation stopped early"));

    ctx.assert_exists("Artifacts/bin/policy.xml");
    ctx.assert_not_exists("ImageMagick/MagickCore/version.h");
    ctx.assert_not_exists("VisualMagick/NOTICE.txt");
}

#[test]
fn explicit_configuration_path_is_used() {
    let ctx = TestContext::new();
    ctx.remove("configure.yml");
    ctx.write("build/arm.yml", "toolchain: vs2022\narchitecture: arm64\n");

    ctx.cli().args(["generate", "--config", "build/arm.yml"]).assert().success();

    assert!(ctx.read("VisualDynamicMT.sln").contains(".Build.0 = Release|ARM64\r\n"));
    assert_eq!(
        ctx.read("VisualMagick/utilities/ImageMagick.version.h"),
        "#define MagickTargetCpu \"arm64\"\n"
    );
}

#[test]
fn invalid_configuration_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2022\narchitecture: x64\nquantum_depth: 12\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to parse"));
}
