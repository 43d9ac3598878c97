//! CLI smoke tests for the holocron-server binary.

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to run the holocron-server binary with given arguments.
fn run_holocron_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_holocron-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute holocron-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_holocron_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("holocron-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("seed"), "Should contain 'seed' subcommand");
    assert!(
        stdout.contains("config"),
        "Should contain 'config' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_holocron_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("holocron-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_holocron_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_config_command_prints_effective_yaml() {
    let mut config_file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    writeln!(config_file, "server:\n  host: 127.0.0.1\n  port: 4321").expect("write temp config");

    let config_path = config_file.path().to_string_lossy().to_string();
    let output = run_holocron_server(&["--config", &config_path, "config"]);

    assert!(output.status.success(), "Config command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4321"), "Should reflect the YAML port");
    assert!(
        stdout.contains("database"),
        "Should print the database section"
    );
    assert!(
        stdout.contains("upstream"),
        "Should print the catalog upstream section"
    );
}
