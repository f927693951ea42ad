//! Integration tests for the derelict CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::arg_path;

fn derelict(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("derelict").unwrap();
    cmd.arg("--config")
        .arg(arg_path(dir.path(), "config.toml"))
        .arg("--log-file")
        .arg(arg_path(dir.path(), "derelict.log"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    derelict(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn status_reports_default_terminals() {
    let dir = TempDir::new().unwrap();
    derelict(&dir)
        .args(["--seed", "1", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MOTHER MOT-"))
        .stdout(predicate::str::contains("System degradation: 21%"))
        .stdout(predicate::str::contains("SECURITY terminal"));
}

#[test]
fn status_of_unknown_terminal_fails() {
    let dir = TempDir::new().unwrap();
    derelict(&dir)
        .args(["status", "bridge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bridge"));
}

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    derelict(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    derelict(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    derelict(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_terminals() {
    let dir = TempDir::new().unwrap();
    derelict(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[typewriter]"))
        .stdout(predicate::str::contains("[[terminals]]"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[typewriter]\nglitch_chance = 2.0\n",
    )
    .unwrap();
    derelict(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("glitch_chance"));
}
