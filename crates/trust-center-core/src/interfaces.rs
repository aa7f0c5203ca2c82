// crates/trust-center-core/src/interfaces.rs
// ============================================================================
// Module: Trust Center Store Interfaces
// Description: Persistence seams for configuration and request records.
// Purpose: Keep the service independent of any particular database.
// Dependencies: serde, thiserror, crate::requests
// ============================================================================

//! ## Overview
//! Two traits cover persistence: [`TrustConfigStore`] holds the single
//! configuration document (last writer wins) and [`RequestStore`] keeps the
//! append-only log of document requests. Shared wrappers make either store
//! clonable across request handlers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::requests::DocumentRequest;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Stored configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTrustConfig {
    /// Raw YAML text.
    pub yaml: String,
    /// Last save timestamp; `None` for the built-in template.
    pub updated_at: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Trust center store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("trust center store io error: {0}")]
    Io(String),
    /// Stored data is corrupted.
    #[error("trust center store corruption: {0}")]
    Corrupt(String),
    /// Store schema version is incompatible.
    #[error("trust center store version mismatch: {0}")]
    VersionMismatch(String),
    /// Stored or submitted data is invalid.
    #[error("trust center store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("trust center store error: {0}")]
    Store(String),
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Storage for the trust center configuration document.
pub trait TrustConfigStore {
    /// Loads the stored document, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load(&self) -> Result<Option<StoredTrustConfig>, StoreError>;

    /// Replaces the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when saving fails.
    fn save(&self, record: &StoredTrustConfig) -> Result<(), StoreError>;
}

/// Storage for document access requests.
pub trait RequestStore {
    /// Lists requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when listing fails.
    fn list(&self) -> Result<Vec<DocumentRequest>, StoreError>;

    /// Appends a request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    fn insert(&self, request: &DocumentRequest) -> Result<(), StoreError>;
}

// ============================================================================
// SECTION: Shared Store Wrappers
// ============================================================================

/// Shared configuration store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedTrustConfigStore {
    /// Inner store implementation.
    inner: Arc<dyn TrustConfigStore + Send + Sync>,
}

impl SharedTrustConfigStore {
    /// Wraps a configuration store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl TrustConfigStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn TrustConfigStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl TrustConfigStore for SharedTrustConfigStore {
    fn load(&self) -> Result<Option<StoredTrustConfig>, StoreError> {
        self.inner.load()
    }

    fn save(&self, record: &StoredTrustConfig) -> Result<(), StoreError> {
        self.inner.save(record)
    }
}

/// Shared request store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedRequestStore {
    /// Inner store implementation.
    inner: Arc<dyn RequestStore + Send + Sync>,
}

impl SharedRequestStore {
    /// Wraps a request store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl RequestStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn RequestStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl RequestStore for SharedRequestStore {
    fn list(&self) -> Result<Vec<DocumentRequest>, StoreError> {
        self.inner.list()
    }

    fn insert(&self, request: &DocumentRequest) -> Result<(), StoreError> {
        self.inner.insert(request)
    }
}
