// crates/trust-center-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests for the trust-center binary.
// Purpose: Exercise offline document tooling and serve safety checks end to end.
// Dependencies: trust-center-cli binary, serde_json, tempfile
// ============================================================================
//! ## Overview
//! Runs the compiled `trust-center` binary against temporary files and checks
//! exit status plus stdout/stderr content.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn trust_center_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_trust-center"))
}

fn run(args: &[&str]) -> Output {
    Command::new(trust_center_bin())
        .args(args)
        .env_remove("TRUST_CENTER_CONFIG")
        .env_remove("TRUST_CENTER_ALLOW_NON_LOOPBACK")
        .output()
        .expect("run trust-center")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

const MINIMAL_YAML: &str = "\
company:
  name: Acme
  tagline: Secure by default
  description: Acme builds things.
hero:
  statusMessage: All systems operational
compliance:
  - name: SOC 2
    status: Certified
";

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies `--version` prints the binary name.
#[test]
fn version_flag_prints_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("trust-center "), "unexpected stdout: {stdout}");
}

/// Verifies the template round-trips through `validate`.
#[test]
fn template_output_validates() {
    let output = run(&["template"]);
    assert!(output.status.success());
    let template = String::from_utf8(output.stdout).expect("utf-8 template");
    assert!(template.contains("name: EzTrust"));

    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "template.yaml", &template);
    let output = run(&["validate", &path_arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("company=EzTrust"), "unexpected stdout: {stdout}");
}

/// Verifies `validate` reports the company name and section count.
#[test]
fn validate_reports_summary() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "trust.yaml", MINIMAL_YAML);
    let output = run(&["validate", &path_arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("company=Acme"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("sections=1"), "unexpected stdout: {stdout}");
}

/// Verifies `validate` fails with field-level issues.
#[test]
fn validate_rejects_invalid_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "broken.yaml", "theme: dark\n");
    let output = run(&["validate", &path_arg(&path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid trust center configuration"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("company: Required"), "unexpected stderr: {stderr}");
}

/// Verifies missing files produce a read failure rather than a panic.
#[test]
fn validate_reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.yaml");
    let output = run(&["validate", &path_arg(&missing)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read trust center YAML"), "unexpected stderr: {stderr}");
}

/// Verifies `render` prints the page description as JSON.
#[test]
fn render_prints_page_json() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "trust.yaml", MINIMAL_YAML);
    let output = run(&["render", &path_arg(&path)]);
    assert!(output.status.success());
    let page: Value = serde_json::from_slice(&output.stdout).expect("page json");
    assert_eq!(page["title"], "Acme Trust Center");
    assert_eq!(page["metaTitle"], "Acme | Trust Center");
}

/// Verifies `schema` prints the published JSON Schema.
#[test]
fn schema_prints_json_schema() {
    let output = run(&["schema"]);
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).expect("schema json");
    assert_eq!(schema["title"], "Trust Center Configuration");
    assert_eq!(schema["required"][0], "company");
}

/// Verifies `config validate` accepts a well-formed config.
#[test]
fn config_validate_accepts_valid_config() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "trust-center.toml", "[server]\nbind = \"127.0.0.1:4000\"\n");
    let output = run(&["config", "validate", "--config", &path_arg(&path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config valid."), "unexpected stdout: {stdout}");
}

/// Verifies `config validate` rejects an invalid store section.
#[test]
fn config_validate_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "trust-center.toml", "[store]\ntype = \"sqlite\"\n");
    let output = run(&["config", "validate", "--config", &path_arg(&path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sqlite store requires path"), "unexpected stderr: {stderr}");
}

/// Verifies non-loopback binds are rejected before server startup.
#[test]
fn serve_rejects_non_loopback_bind() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "trust-center.toml", "[server]\nbind = \"0.0.0.0:8080\"\n");
    let output = run(&["serve", "--config", &path_arg(&path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-loopback"), "unexpected stderr: {stderr}");
}
