use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn install_without_folder_requires_terminal() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("install")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("LOCAL_FOLDER is required"));
}

#[test]
fn install_rejects_multi_letter_remap_unit() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "-m", "TT"])
        .arg(ctx.path("local"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid drive letter 'TT'"));

    assert!(!ctx.path("local").exists());
}

#[test]
fn install_rejects_rez_archive_with_download() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["install", "-d", "--rez-archive", "rez.zip"])
        .arg(ctx.path("local"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn install_rejects_malformed_settings() {
    let ctx = TestContext::new();
    ctx.write_settings("[python\nversion = 3");

    ctx.cli()
        .arg("install")
        .arg(ctx.path("local"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid settings file"));
}

#[test]
fn install_reports_missing_settings_file() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .arg("--config")
        .arg(ctx.path("absent.toml"))
        .arg("install")
        .arg(ctx.path("local"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Settings file not found"));
}
