use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn policykit_cmd() -> Command {
    Command::cargo_bin("policykit").unwrap()
}

#[test]
fn help_works() {
    policykit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("redline"));
}

#[test]
fn every_subcommand_has_help() {
    for sub in ["select", "diff", "redline", "render", "md", "explain", "lint"] {
        policykit_cmd().args([sub, "--help"]).assert().success();
    }
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    policykit_cmd().assert().failure().code(2);
}
