use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn update_requires_existing_toolset() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("update")
        .arg("--root")
        .arg(ctx.root())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No toolset found"));
}

#[test]
fn update_rejects_rez_archive_with_download() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["update", "-d", "--rez-archive", "rez.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn update_without_rez_payload_keeps_interpreter() {
    let ctx = TestContext::new();
    let toolset = ctx.populate_toolset("utgtools");

    ctx.cli()
        .arg("u")
        .arg("--root")
        .arg(&toolset)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("acquire-tool"));

    assert!(toolset.join("core/python/python.exe").is_file());
}
