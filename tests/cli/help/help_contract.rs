use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn install_alias_shows_install_options() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .args(["i", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--release"))
        .stdout(predicate::str::contains("--map"))
        .stdout(predicate::str::contains("--download"));
}

#[test]
fn version_is_reported() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
