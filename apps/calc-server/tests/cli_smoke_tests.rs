#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the calc-server binary
//!
//! These verify configuration validation, help output, and the
//! non-serving commands end to end.

use std::io::Write as _;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run the calc-server binary with the given arguments.
fn run_calc_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calc-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calc-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_calc_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc-server"), "Should contain binary name");
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calc_server(&["--version"]);
    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("calc-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calc_server(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid") || stderr.contains("unexpected"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calc_server(&["--config", "/nonexistent/config.yaml", "check"]);
    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "server:\n  bind_addr: [not, a, string").unwrap();

    let output = run_calc_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(
        !output.status.success(),
        "Should fail on syntactically invalid YAML"
    );
}

#[test]
fn test_cli_config_validation_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("unknown.yaml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "server:\n  bind_address: \"127.0.0.1:9000\"").unwrap();

    let output = run_calc_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(!output.status.success(), "Should fail on unknown config key");
}

#[test]
fn test_cli_check_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("valid.yaml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        "server:\n  bind_addr: \"127.0.0.1:9000\"\ncalculator:\n  history_capacity: 10"
    )
    .unwrap();

    let output = run_calc_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(output.status.success(), "Valid config should pass check");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:9000"));
    assert!(stdout.contains("\"history_capacity\": 10"));
}

#[test]
fn test_cli_print_config() {
    let output = run_calc_server(&["--print-config"]);
    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"));
    assert!(stdout.contains("bind_addr"));
    assert!(stdout.contains("history_capacity"));
}
