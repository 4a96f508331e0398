use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_writes_default_configuration() {
    let ctx = TestContext::empty();

    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created"))
        .stdout(predicate::str::contains("configure.yml"));

    let config = ctx.read("configure.yml");
    assert!(config.contains("toolchain: vs2022"));
    assert!(config.contains("policy: open"));
}

#[test]
fn init_rejects_existing_configuration() {
    let ctx = TestContext::empty();
    ctx.cli().arg("init").assert().success();

    ctx.cli()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration file already exists"));
}

#[test]
fn init_rejects_missing_root() {
    let ctx = TestContext::empty();

    ctx.cli()
        .args(["init", "--root", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
}

#[test]
fn generated_default_configuration_drives_generate() {
    let ctx = TestContext::new();
    ctx.remove("configure.yml");
    ctx.cli().arg("init").assert().success();

    ctx.generate();

    ctx.assert_exists("VisualDynamicMT.sln");
}
