// crates/trust-center-config/src/lib.rs
// ============================================================================
// Module: Trust Center Config Library
// Description: Server configuration model and validation.
// Purpose: Single source of truth for trust-center.toml semantics.
// Dependencies: trust-center-store-sqlite, serde, toml
// ============================================================================

//! ## Overview
//! `trust-center-config` defines the configuration consumed by the HTTP
//! server: bind address, body limits, audit output, and the storage backend.
//! Loading is fail-closed with hard limits on path length and file size.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
