use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn deploy_missing_archive_touches_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("deploy")
        .arg(ctx.path("RedistributableRez.zip"))
        .arg(ctx.path("target"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Payload not found"));

    assert!(!ctx.path("target").exists());
}

#[test]
fn deploy_rejects_invalid_remap_unit() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deploy", "-m", "12"])
        .arg(ctx.path("RedistributableRez.zip"))
        .arg(ctx.path("target"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid drive letter"));
}
