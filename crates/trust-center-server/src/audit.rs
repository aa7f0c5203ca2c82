// crates/trust-center-server/src/audit.rs
// ============================================================================
// Module: API Audit Logging
// Description: Structured audit events for trust center API handling.
// Purpose: Record request outcomes and internal failure detail as JSON lines.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Audit events are the only place internal error detail is kept. Clients see
//! fixed messages for server-side failures while the sink receives the store
//! error or the parse error behind a template fallback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::telemetry::ApiOutcome;
use crate::telemetry::ApiRoute;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Per-request audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// HTTP method.
    pub method: &'static str,
    /// Route that handled the request.
    pub route: ApiRoute,
    /// HTTP status code.
    pub status: u16,
    /// Request outcome.
    pub outcome: ApiOutcome,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Request body size in bytes.
    pub request_bytes: usize,
    /// Response body size in bytes.
    pub response_bytes: usize,
}

/// Inputs required to construct a request audit event.
pub struct ApiAuditEventParams {
    /// Route that handled the request.
    pub route: ApiRoute,
    /// HTTP status code.
    pub status: u16,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Request body size in bytes.
    pub request_bytes: usize,
    /// Response body size in bytes.
    pub response_bytes: usize,
}

impl ApiAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: ApiAuditEventParams) -> Self {
        Self {
            event: "api_request",
            timestamp_ms: timestamp_ms(),
            method: params.route.method(),
            route: params.route,
            status: params.status,
            outcome: ApiOutcome::from_status(params.status),
            error_kind: params.error_kind,
            request_bytes: params.request_bytes,
            response_bytes: params.response_bytes,
        }
    }
}

/// Storage failure audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct StorageFailureEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Route that observed the failure.
    pub route: ApiRoute,
    /// Internal error detail (never returned to clients).
    pub detail: String,
}

impl StorageFailureEvent {
    /// Creates a storage failure event.
    #[must_use]
    pub fn new(route: ApiRoute, detail: String) -> Self {
        Self {
            event: "storage_failure",
            timestamp_ms: timestamp_ms(),
            route,
            detail,
        }
    }
}

/// Template fallback audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigFallbackEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Route that served the fallback.
    pub route: ApiRoute,
    /// Fallback reason label.
    pub reason: &'static str,
    /// Internal error detail.
    pub detail: String,
}

impl ConfigFallbackEvent {
    /// Creates a fallback event.
    #[must_use]
    pub fn new(route: ApiRoute, reason: &'static str, detail: String) -> Self {
        Self {
            event: "config_fallback",
            timestamp_ms: timestamp_ms(),
            route,
            reason,
            detail,
        }
    }
}

/// Milliseconds since the Unix epoch, zero if the clock is before it.
fn timestamp_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for API events.
pub trait ApiAuditSink: Send + Sync {
    /// Record a request audit event.
    fn record(&self, event: &ApiAuditEvent);

    /// Record a storage failure.
    fn record_storage_failure(&self, _event: &StorageFailureEvent) {}

    /// Record a template fallback on a public read.
    fn record_fallback(&self, _event: &ConfigFallbackEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl StderrAuditSink {
    /// Writes one serialized event line to stderr.
    fn write_line(event: &impl Serialize) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

impl ApiAuditSink for StderrAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        Self::write_line(event);
    }

    fn record_storage_failure(&self, event: &StorageFailureEvent) {
        Self::write_line(event);
    }

    fn record_fallback(&self, event: &ConfigFallbackEvent) {
        Self::write_line(event);
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized event line.
    fn write_line(&self, event: &impl Serialize) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl ApiAuditSink for FileAuditSink {
    fn record(&self, event: &ApiAuditEvent) {
        self.write_line(event);
    }

    fn record_storage_failure(&self, event: &StorageFailureEvent) {
        self.write_line(event);
    }

    fn record_fallback(&self, event: &ConfigFallbackEvent) {
        self.write_line(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ApiAuditSink for NoopAuditSink {
    fn record(&self, _event: &ApiAuditEvent) {}
}
