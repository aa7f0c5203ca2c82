// crates/trust-center-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

//! Config load validation tests for trust-center-config.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use trust_center_config::ConfigError;
use trust_center_config::TrustCenterServerConfig;

type TestResult = Result<(), String>;

fn assert_invalid(
    result: Result<TrustCenterServerConfig, ConfigError>,
    needle: &str,
) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(contents: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(TrustCenterServerConfig::load(Some(path)), "config path exceeds max length")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(TrustCenterServerConfig::load(Some(path)), "config path component too long")
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(
        TrustCenterServerConfig::load(Some(file.path())),
        "config file exceeds size limit",
    )
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(TrustCenterServerConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_rejects_missing_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(TrustCenterServerConfig::load(Some(&path)), "config io error")
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = write_config("[server\nbind = ")?;
    assert_invalid(TrustCenterServerConfig::load(Some(file.path())), "config parse error")
}

#[test]
fn load_reads_full_file() -> TestResult {
    let file = write_config(
        r#"
[server]
bind = "0.0.0.0:8080"
max_body_bytes = 4096

[server.audit]
enabled = false
path = "audit.jsonl"

[store]
type = "sqlite"
path = "data/trust-center.db"
busy_timeout_ms = 250
journal_mode = "delete"
sync_mode = "normal"
"#,
    )?;
    let config =
        TrustCenterServerConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.server.max_body_bytes != 4096 || config.server.audit.enabled {
        return Err("server section not applied".to_string());
    }
    let sqlite = config.store.sqlite_config().ok_or("sqlite config missing")?;
    if sqlite.path != Path::new("data/trust-center.db") || sqlite.busy_timeout_ms != 250 {
        return Err(format!("unexpected sqlite config {}", sqlite.path.display()));
    }
    Ok(())
}
