use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn pack_writes_redistributable_archive() {
    let ctx = TestContext::new();
    let toolset = ctx.populate_toolset("utgtools");

    ctx.cli()
        .arg("pack")
        .arg(&toolset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Packing"))
        .stdout(predicate::str::contains("Packed 2 file(s)"));

    assert!(toolset.join("redist/RedistributableRez.zip").is_file());
}

#[test]
fn pack_alias_is_accepted() {
    let ctx = TestContext::new();
    let toolset = ctx.populate_toolset("utgtools");

    ctx.cli().arg("p").arg(&toolset).assert().success();
}

#[test]
fn pack_without_core_is_not_a_toolset() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("pack")
        .arg(ctx.root())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No toolset found"));
}
