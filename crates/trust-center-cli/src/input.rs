// crates/trust-center-cli/src/input.rs
// ============================================================================
// Module: CLI Input Reads
// Description: Bounded file reads for YAML documents passed to the CLI.
// Purpose: Fail closed on oversized or non-UTF-8 inputs.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! The file size is checked from metadata before reading, and the read itself
//! is capped one byte past the limit so a file that grows mid-read is still
//! rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a trust center YAML document read by the CLI.
pub const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug, thiserror::Error)]
pub enum ReadLimitError {
    /// File I/O failure.
    #[error("{0}")]
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    #[error("file is {size} bytes (limit {limit})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// File content is not UTF-8.
    #[error("file is not utf-8")]
    NotUtf8,
}

// ============================================================================
// SECTION: Reads
// ============================================================================

/// Reads a file from disk while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`ReadLimitError`] on I/O failure or when the file exceeds `max_bytes`.
pub fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads a UTF-8 text file while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`ReadLimitError`] on I/O failure, oversize, or invalid UTF-8.
pub fn read_text_with_limit(path: &Path, max_bytes: usize) -> Result<String, ReadLimitError> {
    let bytes = read_bytes_with_limit(path, max_bytes)?;
    String::from_utf8(bytes).map_err(|_| ReadLimitError::NotUtf8)
}
