// crates/trust-center-server/src/telemetry.rs
// ============================================================================
// Module: API Telemetry
// Description: Observability hooks for the trust center HTTP API.
// Purpose: Provide metric events and latency buckets without hard deps.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for API request counters and
//! latency histograms. Deployments plug in their own exporter by implementing
//! [`ApiMetrics`]; labels never carry request payloads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default latency buckets in milliseconds for API request histograms.
pub const API_LATENCY_BUCKETS_MS: &[u64] =
    &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000, 2_500, 5_000, 10_000, 30_000];

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// API route classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiRoute {
    /// `GET /api/trust-config`.
    GetTrustConfig,
    /// `POST /api/trust-config`.
    SaveTrustConfig,
    /// `GET /api/requests`.
    ListRequests,
    /// `POST /api/requests`.
    SubmitRequest,
    /// `GET /api/trust-center`.
    PublicPage,
}

impl ApiRoute {
    /// Returns the HTTP method for the route.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::GetTrustConfig | Self::ListRequests | Self::PublicPage => "GET",
            Self::SaveTrustConfig | Self::SubmitRequest => "POST",
        }
    }

    /// Returns the route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::GetTrustConfig | Self::SaveTrustConfig => "/api/trust-config",
            Self::ListRequests | Self::SubmitRequest => "/api/requests",
            Self::PublicPage => "/api/trust-center",
        }
    }
}

/// API request outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOutcome {
    /// Successful request.
    Ok,
    /// Rejected caller input (4xx).
    Rejected,
    /// Server-side failure (5xx).
    Error,
}

impl ApiOutcome {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            0..=399 => Self::Ok,
            400..=499 => Self::Rejected,
            _ => Self::Error,
        }
    }

    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }
}

/// API request metric event payload.
#[derive(Debug, Clone)]
pub struct ApiMetricEvent {
    /// Route that handled the request.
    pub route: ApiRoute,
    /// Request outcome.
    pub outcome: ApiOutcome,
    /// HTTP status code.
    pub status: u16,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Request body size in bytes.
    pub request_bytes: usize,
    /// Response body size in bytes.
    pub response_bytes: usize,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for API requests and latencies.
pub trait ApiMetrics: Send + Sync {
    /// Records a request counter event.
    fn record_request(&self, event: ApiMetricEvent);
    /// Records a latency observation for the request.
    fn record_latency(&self, event: ApiMetricEvent, latency: Duration);
}

/// No-op metrics sink.
pub struct NoopMetrics;

impl ApiMetrics for NoopMetrics {
    fn record_request(&self, _event: ApiMetricEvent) {}

    fn record_latency(&self, _event: ApiMetricEvent, _latency: Duration) {}
}
