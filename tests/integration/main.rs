//! Integration tests for the todoapp CLI
//!
//! These tests run the compiled binary: argument handling, configuration
//! output, and a full HTTP round trip against a live server.

// Include lifecycle tests from the same directory
mod lifecycle_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a todoapp command with a clean environment
fn todoapp() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("todoapp"));
    for key in [
        "TODOAPP_BIND",
        "TODOAPP_PORT",
        "TODOAPP_WORKERS",
        "TODOAPP_PAGE_SIZE",
        "TODOAPP_CORS_ORIGIN",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Write a config file into `dir` and return its path as a string
fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("todoapp.toml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version_flag() {
    todoapp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_subcommand() {
    todoapp()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("todoapp v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_lists_subcommands() {
    todoapp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_subcommand_prints_hint() {
    todoapp()
        .assert()
        .success()
        .stdout(predicate::str::contains("todoapp --help"));
}

#[test]
fn test_unknown_subcommand_fails() {
    todoapp().arg("frobnicate").assert().failure();
}

// =============================================================================
// CONFIG OUTPUT
// =============================================================================

#[test]
fn test_config_prints_effective_toml() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[list]\npage_size = 25\n");

    todoapp()
        .args(["--config", &path, "config", "--port", "9999"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 9999"))
        .stdout(predicate::str::contains("page_size = 25"))
        .stdout(predicate::str::contains("bind = \"127.0.0.1\""));
}

#[test]
fn test_env_overrides_file_and_flags_override_env() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[server]\nworkers = 2\nport = 7000\n");

    todoapp()
        .args(["--config", &path, "config", "--port", "7002"])
        .env("TODOAPP_PORT", "7001")
        .env("TODOAPP_WORKERS", "3")
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 7002"))
        .stdout(predicate::str::contains("workers = 3"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "");

    todoapp()
        .args(["--config", &path, "config", "--page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_missing_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    todoapp()
        .args(["--config", &missing.to_string_lossy(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}
