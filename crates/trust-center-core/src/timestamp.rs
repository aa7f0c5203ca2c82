// crates/trust-center-core/src/timestamp.rs
// ============================================================================
// Module: Timestamps
// Description: UTC timestamp formatting for persisted records.
// Purpose: Produce sortable RFC 3339 strings with millisecond precision.
// Dependencies: thiserror, time
// ============================================================================

//! ## Overview
//! Stored timestamps are UTC RFC 3339 strings with exactly three fractional
//! digits and a `Z` suffix, so lexical order matches chronological order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;
use time::UtcOffset;
use time::format_description;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Format description for stored timestamps.
const TIMESTAMP_FORMAT: &str =
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Timestamp formatting failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timestamp formatting failed: {0}")]
pub struct TimestampError(String);

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats an instant as a UTC timestamp string.
///
/// # Errors
///
/// Returns [`TimestampError`] when the instant cannot be formatted.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, TimestampError> {
    let format =
        format_description::parse(TIMESTAMP_FORMAT).map_err(|err| TimestampError(err.to_string()))?;
    at.to_offset(UtcOffset::UTC).format(&format).map_err(|err| TimestampError(err.to_string()))
}

/// Returns the current time as a UTC timestamp string.
///
/// # Errors
///
/// Returns [`TimestampError`] when the clock value cannot be formatted.
pub fn now_timestamp() -> Result<String, TimestampError> {
    format_timestamp(OffsetDateTime::now_utc())
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

    use time::OffsetDateTime;

    use super::format_timestamp;

    #[test]
    fn timestamps_use_fixed_millisecond_precision() {
        let at = OffsetDateTime::from_unix_timestamp(1_718_186_400).expect("valid instant");
        assert_eq!(format_timestamp(at).expect("format"), "2024-06-12T10:00:00.000Z");
    }

    #[test]
    fn timestamps_are_normalized_to_utc() {
        let at = OffsetDateTime::from_unix_timestamp(0)
            .expect("valid instant")
            .to_offset(time::UtcOffset::from_hms(-3, 0, 0).expect("offset"));
        assert_eq!(format_timestamp(at).expect("format"), "1970-01-01T00:00:00.000Z");
    }
}
