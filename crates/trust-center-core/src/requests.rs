// crates/trust-center-core/src/requests.rs
// ============================================================================
// Module: Document Request Intake
// Description: Validation and construction of document access requests.
// Purpose: Accept untrusted request payloads and produce persisted records.
// Dependencies: rand, serde, serde_json, crate::decode
// ============================================================================

//! ## Overview
//! Visitors ask for gated documents by submitting an email, the document
//! name, their company, and an optional message. Payloads are validated field
//! by field and every problem is reported together. Accepted submissions
//! become [`DocumentRequest`] records with a random identifier and a
//! `pending` status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::decode::Decoder;
use crate::decode::FieldPath;
use crate::decode::ValidationReport;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of generated request identifiers.
pub const REQUEST_ID_LENGTH: usize = 10;
/// URL-safe alphabet for request identifiers.
const REQUEST_ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
/// Minimum characters in the document name.
pub const MIN_DOCUMENT_CHARS: usize = 2;
/// Minimum characters in the company name.
pub const MIN_COMPANY_CHARS: usize = 2;
/// Maximum characters in the optional message.
pub const MAX_MESSAGE_CHARS: usize = 500;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Lifecycle status of a document request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a response from the trust team.
    #[default]
    Pending,
    /// Answered by the trust team.
    Responded,
}

impl RequestStatus {
    /// Returns the stored label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Responded => "responded",
        }
    }

    /// Parses a stored label; missing or unknown labels read as pending.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("responded") => Self::Responded,
            _ => Self::Pending,
        }
    }
}

/// Persisted document access request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    /// Random request identifier.
    pub id: String,
    /// Requester email.
    pub email: String,
    /// Requested document name.
    pub document: String,
    /// Requester company.
    pub company: String,
    /// Optional free-form message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Request status.
    pub status: RequestStatus,
    /// Creation timestamp.
    pub created_at: String,
}

impl DocumentRequest {
    /// Creates a pending request from a validated submission.
    #[must_use]
    pub fn new(submission: RequestSubmission, id: String, created_at: String) -> Self {
        Self {
            id,
            email: submission.email,
            document: submission.document,
            company: submission.company,
            message: submission.message,
            status: RequestStatus::Pending,
            created_at,
        }
    }
}

/// Validated request submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSubmission {
    /// Requester email.
    pub email: String,
    /// Requested document name.
    pub document: String,
    /// Requester company.
    pub company: String,
    /// Optional message.
    pub message: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Request payload validation failure listing every field problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestValidationError {
    /// Underlying issue report.
    report: ValidationReport,
}

impl RequestValidationError {
    /// Returns the underlying issue report.
    #[must_use]
    pub const fn report(&self) -> &ValidationReport {
        &self.report
    }
}

impl fmt::Display for RequestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, issue) in self.report.issues().iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestValidationError {}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates an untrusted request payload.
///
/// # Errors
///
/// Returns [`RequestValidationError`] listing every invalid field.
pub fn validate_submission(payload: &Value) -> Result<RequestSubmission, RequestValidationError> {
    let mut decoder = Decoder::new();
    let root = FieldPath::root();
    let submission = match decoder.expect_object(payload, &root) {
        Some(object) => decode_submission(&mut decoder, object, &root),
        None => RequestSubmission {
            email: String::new(),
            document: String::new(),
            company: String::new(),
            message: None,
        },
    };
    decoder.finish(submission).map_err(|report| RequestValidationError {
        report,
    })
}

/// Decodes submission fields from a payload mapping.
fn decode_submission(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> RequestSubmission {
    let email = decoder.required_email(object, "email", path);
    let document = decoder.required_string(object, "document", path);
    check_min_chars(decoder, object, "document", path, MIN_DOCUMENT_CHARS);
    let company = decoder.required_string(object, "company", path);
    check_min_chars(decoder, object, "company", path, MIN_COMPANY_CHARS);
    let message = decoder.optional_string(object, "message", path);
    if let Some(text) = &message
        && text.chars().count() > MAX_MESSAGE_CHARS
    {
        decoder.report(
            &path.key("message"),
            format!("must contain at most {MAX_MESSAGE_CHARS} characters"),
        );
    }
    RequestSubmission {
        email,
        document,
        company,
        message,
    }
}

/// Reports a minimum length violation when `key` holds a short string.
fn check_min_chars(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    min: usize,
) {
    if let Some(Value::String(text)) = object.get(key)
        && text.chars().count() < min
    {
        decoder.report(&path.key(key), format!("must contain at least {min} characters"));
    }
}

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Generates a random URL-safe request identifier.
#[must_use]
pub fn generate_request_id() -> String {
    let mut rng = rand::thread_rng();
    (0..REQUEST_ID_LENGTH)
        .filter_map(|_| REQUEST_ID_ALPHABET.choose(&mut rng).copied().map(char::from))
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
