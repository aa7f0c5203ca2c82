// crates/trust-center-core/src/parse/tests.rs
// ============================================================================
// Module: Trust Center Parser Unit Tests
// Description: Unit tests for YAML conversion and configuration decoding.
// Purpose: Validate field checks, defaults, and fail-closed YAML handling.
// Dependencies: trust-center-core
// ============================================================================

//! ## Overview
//! Exercises the parser against minimal, invalid, and hostile YAML documents.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::json;

use super::ParseError;
use super::decode_trust_center;
use super::parse_trust_center;
use super::yaml_to_value;
use crate::model::AuditYear;
use crate::model::DocumentAccess;
use crate::model::LayoutSpan;
use crate::model::SectionKey;
use crate::model::Theme;
use crate::template::DEFAULT_TRUST_YAML;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Smallest document that satisfies the schema.
const MINIMAL_YAML: &str = "\
company:
  name: Acme
  tagline: Secure by default
  description: Acme builds rockets.
";

/// Returns the issue strings for a YAML document expected to be invalid.
fn issues_for(yaml: &str) -> Vec<String> {
    match parse_trust_center(yaml) {
        Err(ParseError::Invalid(report)) => {
            report.issues().iter().map(ToString::to_string).collect()
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn minimal_document_applies_defaults() {
    let config = parse_trust_center(MINIMAL_YAML).expect("minimal config");
    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.company.name, "Acme");
    assert!(config.hero.commitments.is_empty());
    assert!(config.documents.is_none());
    assert!(config.layout.is_none());
    assert!(config.sections.is_none());
}

#[test]
fn document_access_defaults_to_request() {
    let yaml = format!(
        "{MINIMAL_YAML}documents:\n  - name: SOC 2\n    description: Report\n    category: Audit\n"
    );
    let config = parse_trust_center(&yaml).expect("config");
    let documents = config.documents.expect("documents");
    assert_eq!(documents[0].access, DocumentAccess::Request);
    assert!(documents[0].tags.is_empty());
}

#[test]
fn default_template_parses() {
    let config = parse_trust_center(DEFAULT_TRUST_YAML).expect("template");
    assert_eq!(config.company.name, "EzTrust");
    assert!(config.documents.is_some_and(|documents| !documents.is_empty()));
}

#[test]
fn compliance_year_accepts_text_and_numbers() {
    let yaml = format!(
        "{MINIMAL_YAML}compliance:\n  - name: ISO 27001\n    status: Certified\n    year: 2024\n  \
         - name: SOC 2\n    status: In progress\n    year: Q3 2025\n"
    );
    let config = parse_trust_center(&yaml).expect("config");
    let compliance = config.compliance.expect("compliance");
    assert_eq!(compliance[0].year, Some(AuditYear::Number(2024.into())));
    assert_eq!(compliance[1].year, Some(AuditYear::Text("Q3 2025".to_string())));
}

#[test]
fn unknown_keys_are_ignored() {
    let yaml = format!("{MINIMAL_YAML}unexpected: true\nlayout:\n  banner: full\n");
    let config = parse_trust_center(&yaml).expect("config");
    assert!(config.layout.is_some_and(|layout| layout.is_empty()));
}

#[test]
fn layout_keys_follow_schema_order() {
    let yaml =
        format!("{MINIMAL_YAML}layout:\n  faqs: full\n  compliance: half\n  documents: half\n");
    let config = parse_trust_center(&yaml).expect("config");
    let layout = config.layout.expect("layout");
    let keys: Vec<SectionKey> = layout.keys().collect();
    assert_eq!(keys, vec![SectionKey::Compliance, SectionKey::Documents, SectionKey::Faqs]);
    assert_eq!(layout.span(SectionKey::Faqs), Some(LayoutSpan::Full));
}

#[test]
fn layout_span_issues_follow_schema_order() {
    let yaml = format!("{MINIMAL_YAML}layout:\n  faqs: wide\n  compliance: tall\n");
    let message = parse_trust_center(&yaml).expect_err("invalid spans").to_string();
    let compliance = message.find("layout.compliance").expect("compliance issue");
    let faqs = message.find("layout.faqs").expect("faqs issue");
    assert!(compliance < faqs, "unexpected issue order: {message}");
}

// ============================================================================
// SECTION: Validation Failures
// ============================================================================

#[test]
fn missing_company_is_reported() {
    assert_eq!(issues_for("theme: dark\n"), vec!["company: Required".to_string()]);
}

#[test]
fn empty_document_reports_missing_company() {
    assert_eq!(issues_for(""), vec!["company: Required".to_string()]);
    assert_eq!(issues_for("~\n"), vec!["company: Required".to_string()]);
}

#[test]
fn non_mapping_root_is_reported() {
    assert_eq!(
        issues_for("- a\n- b\n"),
        vec!["(root): Expected object, received array".to_string()]
    );
}

#[test]
fn every_issue_is_reported_with_its_path() {
    let yaml = "\
theme: blue
company:
  name: Acme
  tagline: 7
contacts:
  email: nope
  sla: 1 day
documents:
  - name: SOC 2
    description: Report
    category: Audit
    access: private
";
    assert_eq!(
        issues_for(yaml),
        vec![
            "theme: Invalid enum value. Expected 'light' | 'dark', received 'blue'".to_string(),
            "company.tagline: Expected string, received number".to_string(),
            "company.description: Required".to_string(),
            "documents.0.access: Invalid enum value. Expected 'public' | 'request', received \
             'private'"
                .to_string(),
            "contacts.email: Invalid email".to_string(),
        ]
    );
}

#[test]
fn invalid_subprocessors_link_is_reported() {
    let yaml = format!("{MINIMAL_YAML}subprocessorsLink: not a url\n");
    assert_eq!(issues_for(&yaml), vec!["subprocessorsLink: Invalid url".to_string()]);
}

#[test]
fn compliance_year_rejects_other_types() {
    let yaml =
        format!("{MINIMAL_YAML}compliance:\n  - name: ISO\n    status: Done\n    year: [2024]\n");
    assert_eq!(
        issues_for(&yaml),
        vec!["compliance.0.year: Invalid input".to_string()]
    );
}

#[test]
fn root_issues_follow_schema_field_order() {
    let yaml = "\
updates: nope
subprocessors: nope
company: 3
layout:
  faqs: wide
theme: blue
";
    assert_eq!(
        issues_for(yaml),
        vec![
            "theme: Invalid enum value. Expected 'light' | 'dark', received 'blue'".to_string(),
            "layout.faqs: Invalid enum value. Expected 'full' | 'half', received 'wide'"
                .to_string(),
            "company: Expected object, received number".to_string(),
            "subprocessors: Expected array, received string".to_string(),
            "updates: Expected array, received string".to_string(),
        ]
    );
}

#[test]
fn parse_error_message_joins_issues() {
    let err = parse_trust_center("company:\n  name: Acme\n").expect_err("invalid");
    assert_eq!(err.to_string(), "company.tagline: Required | company.description: Required");
}

// ============================================================================
// SECTION: Fail-Closed YAML
// ============================================================================

#[test]
fn malformed_yaml_is_a_syntax_error() {
    let err = parse_trust_center("company: [unterminated\n").expect_err("syntax");
    assert!(matches!(err, ParseError::Syntax(_)));
}

#[test]
fn custom_tags_are_rejected() {
    let yaml = format!("{MINIMAL_YAML}hero: !!python/object/apply:os.system ['rm -rf /']\n");
    let err = parse_trust_center(&yaml).expect_err("tag");
    assert!(
        matches!(err, ParseError::Unsupported(_) | ParseError::Syntax(_)),
        "unexpected error: {err:?}"
    );
    let err = parse_trust_center("company: !secret\n  name: Acme\n").expect_err("tag");
    assert!(err.to_string().contains("company: YAML tag"), "unexpected message: {err}");
}

#[test]
fn core_string_tag_resolves_to_plain_string() {
    let yaml = "company:\n  name: !!str 2024\n  tagline: t\n  description: d\n";
    let config = parse_trust_center(yaml).expect("core tags resolve");
    assert_eq!(config.company.name, "2024");
}

#[test]
fn non_finite_numbers_are_rejected() {
    let err = yaml_to_value("value: .inf\n").expect_err("inf");
    assert_eq!(err.to_string(), "value: non-finite numbers are not supported");
}

#[test]
fn complex_mapping_keys_are_rejected() {
    let err = yaml_to_value("? [a, b]\n: value\n").expect_err("complex key");
    assert_eq!(err.to_string(), "(root): mapping keys must be scalars");
}

#[test]
fn scalar_keys_are_stringified() {
    let tree = yaml_to_value("1: one\ntrue: yes\n").expect("tree");
    assert_eq!(tree, json!({ "1": "one", "true": "yes" }));
}

#[test]
fn decode_accepts_json_trees() {
    let tree = json!({
        "company": { "name": "Acme", "tagline": "t", "description": "d" },
        "sections": ["contacts", "nonsense"]
    });
    let config = decode_trust_center(&tree).expect("config");
    assert_eq!(config.sections, Some(vec!["contacts".to_string(), "nonsense".to_string()]));
}
