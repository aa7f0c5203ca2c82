// crates/trust-center-core/src/requests/tests.rs
// ============================================================================
// Module: Request Intake Unit Tests
// Description: Unit tests for document request validation and identifiers.
// Purpose: Validate field checks, message limits, and record construction.
// Dependencies: trust-center-core
// ============================================================================

//! ## Overview
//! Exercises request validation against valid, malformed, and boundary payloads.

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

use serde_json::Value;
use serde_json::json;

use super::DocumentRequest;
use super::MAX_MESSAGE_CHARS;
use super::REQUEST_ID_ALPHABET;
use super::REQUEST_ID_LENGTH;
use super::RequestStatus;
use super::generate_request_id;
use super::validate_submission;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Returns a valid payload with `message` set.
fn payload_with_message(message: &str) -> Value {
    json!({
        "email": "buyer@prospect.io",
        "document": "SOC 2 report",
        "company": "Prospect",
        "message": message,
    })
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn valid_payload_is_accepted() {
    let submission = validate_submission(&json!({
        "email": "buyer@prospect.io",
        "document": "SOC 2 report",
        "company": "Prospect",
    }))
    .expect("valid submission");
    assert_eq!(submission.email, "buyer@prospect.io");
    assert!(submission.message.is_none());
}

#[test]
fn invalid_email_names_the_field() {
    let err = validate_submission(&json!({
        "email": "not-an-email",
        "document": "SOC 2 report",
        "company": "Prospect",
    }))
    .expect_err("invalid email");
    assert_eq!(err.to_string(), "email: Invalid email");
}

#[test]
fn every_field_problem_is_reported() {
    let err = validate_submission(&json!({
        "document": "S",
        "company": 42,
        "message": ["hi"],
    }))
    .expect_err("invalid payload");
    assert_eq!(
        err.to_string(),
        "email: Required, document: must contain at least 2 characters, company: Expected \
         string, received number, message: Expected string, received array"
    );
    assert_eq!(err.report().issues().len(), 4);
}

#[test]
fn non_object_payload_is_rejected() {
    let err = validate_submission(&json!("hello")).expect_err("string payload");
    assert_eq!(err.to_string(), "(root): Expected object, received string");
}

#[test]
fn message_length_limit_is_inclusive() {
    let at_limit = "a".repeat(MAX_MESSAGE_CHARS);
    assert!(validate_submission(&payload_with_message(&at_limit)).is_ok());
    let over_limit = "a".repeat(MAX_MESSAGE_CHARS + 1);
    let err = validate_submission(&payload_with_message(&over_limit)).expect_err("too long");
    assert_eq!(err.to_string(), "message: must contain at most 500 characters");
}

#[test]
fn message_length_counts_characters_not_bytes() {
    let message = "\u{e9}".repeat(MAX_MESSAGE_CHARS);
    assert!(validate_submission(&payload_with_message(&message)).is_ok());
}

// ============================================================================
// SECTION: Records
// ============================================================================

#[test]
fn new_requests_are_pending() {
    let submission = validate_submission(&payload_with_message("Thanks")).expect("valid");
    let request =
        DocumentRequest::new(submission, "abc".to_string(), "2024-06-12T10:00:00.000Z".to_string());
    assert_eq!(request.status, RequestStatus::Pending);
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["createdAt"], "2024-06-12T10:00:00.000Z");
}

#[test]
fn unknown_status_labels_read_as_pending() {
    assert_eq!(RequestStatus::from_label(Some("responded")), RequestStatus::Responded);
    assert_eq!(RequestStatus::from_label(Some("archived")), RequestStatus::Pending);
    assert_eq!(RequestStatus::from_label(None), RequestStatus::Pending);
}

#[test]
fn request_ids_are_url_safe() {
    for _ in 0..32 {
        let id = generate_request_id();
        assert_eq!(id.len(), REQUEST_ID_LENGTH);
        assert!(id.bytes().all(|byte| REQUEST_ID_ALPHABET.contains(&byte)), "bad id {id}");
    }
}
