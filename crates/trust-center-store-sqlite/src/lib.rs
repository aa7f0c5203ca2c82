// crates/trust-center-store-sqlite/src/lib.rs
// ============================================================================
// Module: Trust Center SQLite Store
// Description: SQLite persistence for the trust center configuration and requests.
// Purpose: Provide a durable backend for the trust center store traits.
// Dependencies: trust-center-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! Durable implementation of [`trust_center_core::TrustConfigStore`] and
//! [`trust_center_core::RequestStore`] on a single `SQLite` file with a
//! versioned schema.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::MAX_YAML_BYTES;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;
pub use store::SqliteTrustStore;
pub use store::default_busy_timeout_ms;
