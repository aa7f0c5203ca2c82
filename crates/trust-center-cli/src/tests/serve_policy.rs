// crates/trust-center-cli/src/tests/serve_policy.rs
// ============================================================================
// Module: Serve Policy Tests
// Description: Unit tests for CLI server bind safety rules.
// Purpose: Ensure non-loopback binding remains fail-closed without explicit opt-in.
// Dependencies: trust-center-cli serve_policy, trust-center-config
// ============================================================================

//! ## Overview
//! Validates the serve policy allows loopback binds and requires opt-in for
//! every other address.

use trust_center_config::TrustCenterServerConfig;

use crate::serve_policy::ServePolicyError;
use crate::serve_policy::enforce_local_only;
use crate::serve_policy::parse_allow_non_loopback_value;

fn config_with_bind(bind: &str) -> TrustCenterServerConfig {
    let toml = format!("[server]\nbind = \"{bind}\"\n");
    TrustCenterServerConfig::from_bytes(toml.as_bytes()).expect("config")
}

#[test]
fn loopback_is_local_only() {
    for bind in ["127.0.0.1:3000", "[::1]:3000"] {
        let outcome = enforce_local_only(&config_with_bind(bind), false).expect("loopback allowed");
        assert!(!outcome.network_exposed);
        assert!(outcome.audit_enabled);
    }
}

#[test]
fn non_loopback_requires_opt_in() {
    let err = enforce_local_only(&config_with_bind("0.0.0.0:8080"), false)
        .expect_err("expected opt-in error");
    assert_eq!(
        err,
        ServePolicyError::NonLoopbackOptInRequired {
            bind: "0.0.0.0:8080".to_string(),
        }
    );
    assert!(err.to_string().contains("--allow-non-loopback"));
}

#[test]
fn non_loopback_allowed_with_opt_in() {
    let outcome =
        enforce_local_only(&config_with_bind("0.0.0.0:8080"), true).expect("opt-in allowed");
    assert!(outcome.network_exposed);
    assert_eq!(outcome.bind_addr.port(), 8080);
}

#[test]
fn invalid_bind_is_reported() {
    let mut config = TrustCenterServerConfig::default();
    config.server.bind = "nowhere".to_string();
    let err = enforce_local_only(&config, false).expect_err("invalid bind");
    assert!(matches!(err, ServePolicyError::InvalidBind { .. }));
}

#[test]
fn parse_allow_non_loopback_accepts_true() {
    assert!(parse_allow_non_loopback_value("true").expect("parse env"));
    assert!(parse_allow_non_loopback_value(" YES ").expect("parse env"));
    assert!(!parse_allow_non_loopback_value("0").expect("parse env"));
}

#[test]
fn parse_allow_non_loopback_rejects_invalid() {
    let err = parse_allow_non_loopback_value("maybe").expect_err("expected invalid env");
    assert!(matches!(err, ServePolicyError::InvalidEnv { .. }));
}
