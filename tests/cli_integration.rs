use assert_cmd::Command;
use predicates::prelude::*;

fn pmdetect() -> Command {
    Command::cargo_bin("pmdetect").unwrap()
}

#[test]
fn shows_help() {
    pmdetect()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Node.js package manager"));
}

#[test]
fn shows_version() {
    pmdetect()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_detection_flags() {
    pmdetect()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--prefer"))
        .stdout(predicate::str::contains("--workspace"))
        .stdout(predicate::str::contains("--cwd"))
        .stdout(predicate::str::contains("--silent"));
}

#[test]
fn run_subcommand_help() {
    pmdetect()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json script"));
}

#[test]
fn exec_subcommand_help() {
    pmdetect()
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package binary"));
}

#[test]
fn rejects_unknown_manager_in_prefer() {
    pmdetect()
        .args(["--prefer", "npm,bun"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bun"));
}

#[test]
fn add_requires_dependencies() {
    pmdetect()
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_config_path_fails() {
    pmdetect()
        .args(["--config", "/nonexistent/path.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn generates_completions() {
    pmdetect()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pmdetect"));
}
