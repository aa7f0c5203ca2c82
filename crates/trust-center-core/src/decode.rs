// crates/trust-center-core/src/decode.rs
// ============================================================================
// Module: Validation Decoder
// Description: Issue-collecting decoder over untrusted JSON-shaped trees.
// Purpose: Turn loosely typed input into typed records while reporting every
//          problem with its field path.
// Dependencies: regex, serde_json, url
// ============================================================================

//! ## Overview
//! The decoder walks an untrusted [`Value`] tree and extracts typed fields.
//! Problems never abort the walk: each one is recorded as a
//! [`ValidationIssue`] with its dotted field path and decoding continues with
//! a placeholder, so a single pass reports every problem at once.
//!
//! Keys that the caller never asks for are ignored. A key that is present
//! with a `null` value is treated as a type error, not as absence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// One segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Mapping key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

/// Location of a value within the input tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    /// Segments from the root.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Returns the root path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a child path for a mapping key.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self {
            segments,
        }
    }

    /// Returns a child path for a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self {
            segments,
        }
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Key(key) => f.write_str(key)?,
                PathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Issues
// ============================================================================

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the offending value.
    pub path: FieldPath,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every issue found while decoding one document.
///
/// # Invariants
/// - Never empty when produced by [`Decoder::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Issues in discovery order.
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns the collected issues.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, issue) in self.issues.iter().enumerate() {
            if position > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the type label used in type mismatch messages.
#[must_use]
pub const fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Email shape: local part of letters, digits and `_ ' + - .` ending in a
/// non-dot, non-quote character, then one or more domain labels and an
/// alphabetic top-level label of two or more characters.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

/// Compiled [`EMAIL_PATTERN`]; `None` only if the pattern fails to compile.
static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Returns true when `value` is a syntactically valid email address.
///
/// A leading dot and consecutive dots anywhere are rejected before the
/// pattern is applied.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_REGEX.as_ref().is_some_and(|regex| regex.is_match(value))
}

/// Formats the allowed values of an enumeration for messages.
fn enum_options(values: &[&str]) -> String {
    values.iter().map(|value| format!("'{value}'")).collect::<Vec<_>>().join(" | ")
}

// ============================================================================
// SECTION: Decoder
// ============================================================================

/// Issue-collecting decoder.
#[derive(Debug, Default)]
pub struct Decoder {
    /// Issues recorded so far.
    issues: Vec<ValidationIssue>,
}

impl Decoder {
    /// Creates a decoder with no recorded issues.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: Vec::new(),
        }
    }

    /// Records an issue at `path`.
    pub fn report(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.clone(),
            message: message.into(),
        });
    }

    /// Returns the decoded value when no issue was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationReport`] with every recorded issue otherwise.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationReport> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationReport {
                issues: self.issues,
            })
        }
    }

    /// Records a type mismatch for `value`.
    fn mismatch(&mut self, path: &FieldPath, expected: &str, value: &Value) {
        self.report(path, format!("Expected {expected}, received {}", type_label(value)));
    }

    /// Interprets `value` as a mapping.
    pub fn expect_object<'a>(
        &mut self,
        value: &'a Value,
        path: &FieldPath,
    ) -> Option<&'a Map<String, Value>> {
        if let Value::Object(object) = value {
            Some(object)
        } else {
            self.mismatch(path, "object", value);
            None
        }
    }

    /// Reads a required string field. Returns an empty placeholder on failure.
    pub fn required_string(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> String {
        let field_path = path.key(key);
        match object.get(key) {
            None => {
                self.report(&field_path, "Required");
                String::new()
            }
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                self.mismatch(&field_path, "string", other);
                String::new()
            }
        }
    }

    /// Reads an optional string field.
    pub fn optional_string(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> Option<String> {
        match object.get(key)? {
            Value::String(text) => Some(text.clone()),
            other => {
                self.mismatch(&path.key(key), "string", other);
                None
            }
        }
    }

    /// Reads an optional string field that must parse as an absolute URL.
    pub fn optional_url(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> Option<String> {
        let text = self.optional_string(object, key, path)?;
        if url::Url::parse(&text).is_err() {
            self.report(&path.key(key), "Invalid url");
            return None;
        }
        Some(text)
    }

    /// Reads a required string field that must be an email address.
    pub fn required_email(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> String {
        let Some(value) = object.get(key) else {
            self.report(&path.key(key), "Required");
            return String::new();
        };
        let Value::String(text) = value else {
            self.mismatch(&path.key(key), "string", value);
            return String::new();
        };
        if !is_valid_email(text) {
            self.report(&path.key(key), "Invalid email");
        }
        text.clone()
    }

    /// Reads an optional enumeration field, falling back to `default`.
    pub fn enumeration<T: Copy>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
        values: &[&str],
        parse: fn(&str) -> Option<T>,
        default: T,
    ) -> T {
        object
            .get(key)
            .map_or(Some(default), |value| self.enum_value(value, &path.key(key), values, parse))
            .unwrap_or(default)
    }

    /// Interprets a present value as one of `values`.
    pub fn enum_value<T>(
        &mut self,
        value: &Value,
        path: &FieldPath,
        values: &[&str],
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let options = enum_options(values);
        let Value::String(text) = value else {
            self.report(path, format!("Expected {options}, received {}", type_label(value)));
            return None;
        };
        let parsed = parse(text);
        if parsed.is_none() {
            self.report(
                path,
                format!("Invalid enum value. Expected {options}, received '{text}'"),
            );
        }
        parsed
    }

    /// Reads an optional list of strings.
    pub fn optional_string_list(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> Option<Vec<String>> {
        let value = object.get(key)?;
        let list_path = path.key(key);
        let Value::Array(items) = value else {
            self.mismatch(&list_path, "array", value);
            return None;
        };
        let mut strings = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(text) => strings.push(text.clone()),
                other => self.mismatch(&list_path.index(index), "string", other),
            }
        }
        Some(strings)
    }

    /// Reads a list of strings that defaults to empty when absent.
    pub fn string_list(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
    ) -> Vec<String> {
        self.optional_string_list(object, key, path).unwrap_or_default()
    }

    /// Reads an optional list of mappings, decoding each with `item`.
    pub fn optional_list<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
        mut item: impl FnMut(&mut Self, &Map<String, Value>, &FieldPath) -> T,
    ) -> Option<Vec<T>> {
        let value = object.get(key)?;
        let list_path = path.key(key);
        let Value::Array(entries) = value else {
            self.mismatch(&list_path, "array", value);
            return None;
        };
        let mut decoded = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let entry_path = list_path.index(index);
            if let Some(entry_object) = self.expect_object(entry, &entry_path) {
                decoded.push(item(self, entry_object, &entry_path));
            }
        }
        Some(decoded)
    }

    /// Reads a list of mappings that defaults to empty when absent.
    pub fn list<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
        item: impl FnMut(&mut Self, &Map<String, Value>, &FieldPath) -> T,
    ) -> Vec<T> {
        self.optional_list(object, key, path, item).unwrap_or_default()
    }

    /// Reads an optional nested mapping, decoding it with `record`.
    pub fn optional_record<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
        record: impl FnOnce(&mut Self, &Map<String, Value>, &FieldPath) -> T,
    ) -> Option<T> {
        let value = object.get(key)?;
        let record_path = path.key(key);
        let record_object = self.expect_object(value, &record_path)?;
        Some(record(self, record_object, &record_path))
    }

    /// Reads a required nested mapping, decoding it with `record`.
    pub fn required_record<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &FieldPath,
        record: impl FnOnce(&mut Self, &Map<String, Value>, &FieldPath) -> T,
    ) -> Option<T> {
        if !object.contains_key(key) {
            self.report(&path.key(key), "Required");
            return None;
        }
        self.optional_record(object, key, path, record)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        reason = "Test helpers use expect/expect_err for concise failure messages."
    )]

    use serde_json::json;

    use super::Decoder;
    use super::EMAIL_REGEX;
    use super::FieldPath;
    use super::is_valid_email;

    #[test]
    fn root_path_renders_placeholder() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        let path = FieldPath::root().key("documents").index(2).key("name");
        assert_eq!(path.to_string(), "documents.2.name");
    }

    #[test]
    fn email_check_accepts_common_addresses() {
        assert!(is_valid_email("trust@eztrust.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(is_valid_email("o'neil@example.io"));
        assert!(is_valid_email("Trust-Team@EZTRUST.COM"));
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_REGEX.is_some());
    }

    #[test]
    fn email_check_rejects_malformed_addresses() {
        let candidates = [
            "not-an-email",
            "@example.com",
            "a@b",
            "a@b.c",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a@-x.com",
            "a@@example.com",
            "a b@example.com",
            "o'@example.com",
            "a@example.c0m",
            "a@example.com\n",
        ];
        for candidate in candidates {
            assert!(!is_valid_email(candidate), "{candidate} should be rejected");
        }
    }

    #[test]
    fn null_field_is_a_type_error() {
        let value = json!({ "name": null });
        let mut decoder = Decoder::new();
        let object = decoder.expect_object(&value, &FieldPath::root()).cloned().unwrap_or_default();
        let _ = decoder.optional_string(&object, "name", &FieldPath::root());
        let report = decoder.finish(()).expect_err("null should be rejected");
        assert_eq!(report.to_string(), "name: Expected string, received null");
    }

    #[test]
    fn enum_messages_list_allowed_values() {
        let value = json!({ "theme": "blue", "other": 3 });
        let mut decoder = Decoder::new();
        let object = decoder.expect_object(&value, &FieldPath::root()).cloned().unwrap_or_default();
        let values = ["light", "dark"];
        let root = FieldPath::root();
        let _ = decoder.enumeration(&object, "theme", &root, &values, |_| None::<u8>, 0);
        let _ = decoder.enumeration(&object, "other", &root, &values, |_| None::<u8>, 0);
        let report = decoder.finish(()).expect_err("invalid enums");
        assert_eq!(
            report.to_string(),
            "theme: Invalid enum value. Expected 'light' | 'dark', received 'blue' | other: \
             Expected 'light' | 'dark', received number"
        );
    }
}
