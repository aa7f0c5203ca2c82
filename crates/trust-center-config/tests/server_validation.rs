// crates/trust-center-config/tests/server_validation.rs
// =============================================================================
// Module: Server Config Validation Tests
// Description: Validate server and store settings after parsing.
// Purpose: Ensure defaults are valid and inconsistent settings fail closed.
// =============================================================================

//! Server and store validation tests for trust-center-config.

use std::net::SocketAddr;

use trust_center_config::ConfigError;
use trust_center_config::StoreType;
use trust_center_config::TrustCenterServerConfig;

type TestResult = Result<(), String>;

fn parse(toml: &str) -> Result<TrustCenterServerConfig, ConfigError> {
    TrustCenterServerConfig::from_bytes(toml.as_bytes())
}

fn assert_invalid(toml: &str, needle: &str) -> TestResult {
    match parse(toml) {
        Err(ConfigError::Invalid(message)) if message.contains(needle) => Ok(()),
        Err(error) => Err(format!("error {error} did not contain {needle}")),
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn defaults_validate() -> TestResult {
    let config = TrustCenterServerConfig::default();
    config.validate().map_err(|err| err.to_string())?;
    let bind = config.server.bind_addr().map_err(|err| err.to_string())?;
    if bind != SocketAddr::from(([127, 0, 0, 1], 3000)) {
        return Err(format!("unexpected default bind {bind}"));
    }
    if config.server.max_body_bytes != 1_048_576 || !config.server.audit.enabled {
        return Err("unexpected server defaults".to_string());
    }
    if config.store.store_type != StoreType::Memory || config.store.sqlite_config().is_some() {
        return Err("default store must be memory".to_string());
    }
    Ok(())
}

#[test]
fn empty_file_uses_defaults() -> TestResult {
    let config = parse("").map_err(|err| err.to_string())?;
    if config.server.bind != "127.0.0.1:3000" {
        return Err(format!("unexpected bind {}", config.server.bind));
    }
    Ok(())
}

#[test]
fn invalid_bind_is_rejected() -> TestResult {
    assert_invalid("[server]\nbind = \"localhost\"\n", "invalid bind address")?;
    assert_invalid("[server]\nbind = \"  \"\n", "server.bind must be non-empty")
}

#[test]
fn zero_body_limit_is_rejected() -> TestResult {
    assert_invalid(
        "[server]\nmax_body_bytes = 0\n",
        "server.max_body_bytes must be greater than zero",
    )
}

#[test]
fn blank_audit_path_is_rejected() -> TestResult {
    assert_invalid("[server.audit]\npath = \" \"\n", "audit.path must be non-empty")
}

#[test]
fn sqlite_store_requires_path() -> TestResult {
    assert_invalid("[store]\ntype = \"sqlite\"\n", "sqlite store requires path")
}

#[test]
fn memory_store_rejects_path() -> TestResult {
    assert_invalid("[store]\npath = \"trust.db\"\n", "memory store must not set path")
}

#[test]
fn sqlite_store_rejects_overlong_component() -> TestResult {
    let toml = format!("[store]\ntype = \"sqlite\"\npath = \"{}\"\n", "a".repeat(300));
    assert_invalid(&toml, "store path component too long")
}

#[test]
fn unknown_store_type_fails_to_parse() -> TestResult {
    match parse("[store]\ntype = \"postgres\"\n") {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(error) => Err(format!("expected parse error, got {error}")),
        Ok(_) => Err("expected parse error".to_string()),
    }
}
