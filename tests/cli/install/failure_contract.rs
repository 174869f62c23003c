use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn install_without_payload_stops_at_interpreter() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("install")
        .arg(ctx.path("local"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("acquire-interpreter"))
        .stderr(predicate::str::contains("Payload not found"));

    assert!(ctx.path("local/utgtools").is_dir());
    assert!(!ctx.path("local/utgtools/core/python").exists());
}

#[test]
fn install_aborts_when_release_path_cannot_be_created() {
    let ctx = TestContext::new();
    fs::write(ctx.path("blocker"), "not a folder").unwrap();

    ctx.cli()
        .arg("install")
        .arg(ctx.path("local"))
        .arg("-r")
        .arg(ctx.path("blocker/packages"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ensure-release-path"));

    assert!(!ctx.path("local/utgtools/core").exists());
}

#[test]
fn install_with_interpreter_archive_stops_without_rez_payload() {
    let ctx = TestContext::new();
    let archive = ctx.path("winpython.zip");
    crate::harness::archives::write_zip(
        &archive,
        &[("python/python.exe", "MZ"), ("python/python39._pth", "python39.zip\n#import site\n")],
    );

    ctx.cli()
        .arg("install")
        .arg(ctx.path("local"))
        .arg("--python-archive")
        .arg(&archive)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Extracting Python"))
        .stderr(predicate::str::contains("acquire-tool"));

    let pth = fs::read_to_string(ctx.path("local/utgtools/core/python/python39._pth")).unwrap();
    assert!(pth.lines().any(|line| line == "import site"));
}
