use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("side-by-side panels"))
        .stdout(predicate::str::contains("--layout"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("multisearch"));
}

#[test]
fn test_cli_rejects_unsupported_layout() {
    cargo_bin_cmd!()
        .args(["--layout", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout '4'"));
}

#[test]
fn test_cli_rejects_non_numeric_layout() {
    cargo_bin_cmd!()
        .args(["--layout", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2, 3 or 6 panels"));
}

#[test]
fn test_cli_with_missing_config_file() {
    cargo_bin_cmd!()
        .args(["--config", "/nonexistent/multisearch/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
