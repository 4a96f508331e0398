use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_component_status() {
    let ctx = TestContext::new();
    ctx.write_config("toolchain: vs2019\narchitecture: x64\n");

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib (dependency) - ok, 1 project(s)"))
        .stdout(predicate::str::contains("jxl (dependency) - unsupported, 0 project(s)"))
        .stdout(predicate::str::contains("opencl (optional-dependency) - skipped, 0 project(s)"))
        .stdout(predicate::str::contains("coders (project) - ok, 2 project(s)"));
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let components: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> =
        components.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["jxl", "zlib", "opencl", "MagickCore", "coders"]);
    assert_eq!(components[1]["files"][0], "CORE_zlib_DynamicMT.vcxproj");
}

#[test]
fn list_requires_configuration() {
    let ctx = TestContext::new();
    ctx.remove("configure.yml");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration file not found"));
}
