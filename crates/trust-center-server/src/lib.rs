// crates/trust-center-server/src/lib.rs
// ============================================================================
// Module: Trust Center Server
// Description: HTTP API for trust center configuration and document requests.
// Purpose: Serve the trust center service over axum with audit and metrics.
// Dependencies: trust-center-core, trust-center-config, axum, tokio
// ============================================================================

//! ## Overview
//! The server exposes five JSON routes over [`trust_center_core::TrustCenterService`]:
//! reading and saving the YAML configuration, listing and submitting document
//! requests, and the render description of the public page.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::ApiAuditEvent;
pub use audit::ApiAuditSink;
pub use audit::ConfigFallbackEvent;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::StorageFailureEvent;
pub use server::ServerError;
pub use server::TrustCenterServer;
pub use telemetry::API_LATENCY_BUCKETS_MS;
pub use telemetry::ApiMetricEvent;
pub use telemetry::ApiMetrics;
pub use telemetry::ApiOutcome;
pub use telemetry::ApiRoute;
pub use telemetry::NoopMetrics;
