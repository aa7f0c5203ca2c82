// crates/trust-center-cli/src/tests/input.rs
// ============================================================================
// Module: CLI Input Read Tests
// Description: Unit tests for bounded file reads.
// Purpose: Ensure oversized and non-UTF-8 inputs fail closed.
// Dependencies: trust-center-cli input module
// ============================================================================

//! ## Overview
//! Validates `read_bytes_with_limit` and `read_text_with_limit`.

use std::fs;

use tempfile::TempDir;

use crate::input::ReadLimitError;
use crate::input::read_bytes_with_limit;
use crate::input::read_text_with_limit;

#[test]
fn read_bytes_with_limit_allows_file_at_limit() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("small.yaml");
    fs::write(&path, b"ok").expect("write small file");
    assert_eq!(read_bytes_with_limit(&path, 2).expect("read small file"), b"ok");
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("large.yaml");
    let limit = 8_usize;
    fs::write(&path, vec![b'a'; limit + 1]).expect("write large file");

    match read_bytes_with_limit(&path, limit).expect_err("expected size limit failure") {
        ReadLimitError::TooLarge {
            size,
            limit: reported,
        } => {
            assert_eq!(size, 9);
            assert_eq!(reported, limit);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_text_with_limit_rejects_non_utf8() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("binary.yaml");
    fs::write(&path, [0xFF, 0xFE]).expect("write binary file");
    let err = read_text_with_limit(&path, 16).expect_err("expected utf-8 failure");
    assert!(matches!(err, ReadLimitError::NotUtf8));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_text_with_limit(&dir.path().join("absent.yaml"), 16).expect_err("missing");
    assert!(matches!(err, ReadLimitError::Io(_)));
}
