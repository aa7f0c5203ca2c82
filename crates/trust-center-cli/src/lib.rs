// crates/trust-center-cli/src/lib.rs
// ============================================================================
// Module: Trust Center CLI Library
// Description: Shared helpers for the trust center command-line interface.
// Purpose: Provide the message catalog, serve policy, and bounded input reads.
// Dependencies: trust-center-config
// ============================================================================

//! ## Overview
//! Helpers used by the `trust-center` binary. User-facing text goes through
//! the [`t!`] message catalog so every command reports consistently.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message catalog and formatting macro.
pub mod i18n;
/// Bounded file reads for CLI inputs.
pub mod input;
/// Network exposure checks for `serve`.
pub mod serve_policy;
