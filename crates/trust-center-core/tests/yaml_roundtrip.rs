// crates/trust-center-core/tests/yaml_roundtrip.rs
// ============================================================================
// Module: YAML Round-Trip Tests
// Description: Serializing a parsed configuration and parsing it again.
// Purpose: Validate that typed records preserve every configured value.
// ============================================================================

//! ## Overview
//! A parsed configuration serialized back to YAML must parse into an equal
//! configuration, including layout spans and numeric audit years.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use trust_center_core::DEFAULT_TRUST_YAML;
use trust_center_core::parse_trust_center;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn assert_round_trip(yaml: &str) -> Result<(), String> {
    let parsed = parse_trust_center(yaml).map_err(|err| err.to_string())?;
    let serialized = serde_yaml::to_string(&parsed).map_err(|err| err.to_string())?;
    let reparsed = parse_trust_center(&serialized).map_err(|err| format!("{err}\n{serialized}"))?;
    if parsed != reparsed {
        return Err(format!("round trip changed the configuration:\n{serialized}"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn default_template_round_trips() -> Result<(), String> {
    assert_round_trip(DEFAULT_TRUST_YAML)
}

#[test]
fn overrides_and_edge_values_round_trip() -> Result<(), String> {
    assert_round_trip(
        "\
theme: dark
company:
  name: 'Acme: Rockets'
  tagline: 'true'
  description: \"Line one\\nLine two\"
compliance:
  - name: ISO 27001
    status: Certified
    year: 2023
  - name: SOC 2
    status: Planned
    year: '2025'
  - name: PCI
    status: Scoping
    year: 2.5
documents: []
layout:
  faqs: full
  documents: half
sections: [faqs, unknown, documents]
faqs:
  - question: 'null'
    answer: '123'
",
    )
}
