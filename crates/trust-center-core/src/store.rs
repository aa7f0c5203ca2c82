// crates/trust-center-core/src/store.rs
// ============================================================================
// Module: Trust Center In-Memory Store
// Description: In-memory configuration and request store.
// Purpose: Provide a process-local store for tests and single-node demos.
// Dependencies: crate::interfaces, crate::requests
// ============================================================================

//! ## Overview
//! [`InMemoryTrustStore`] implements both store traits over mutex-guarded
//! state. Contents are lost when the process exits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use crate::interfaces::RequestStore;
use crate::interfaces::StoreError;
use crate::interfaces::StoredTrustConfig;
use crate::interfaces::TrustConfigStore;
use crate::requests::DocumentRequest;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory trust center store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTrustStore {
    /// Stored configuration document.
    config: Arc<Mutex<Option<StoredTrustConfig>>>,
    /// Requests in insertion order.
    requests: Arc<Mutex<Vec<DocumentRequest>>>,
}

impl InMemoryTrustStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrustConfigStore for InMemoryTrustStore {
    fn load(&self) -> Result<Option<StoredTrustConfig>, StoreError> {
        let guard = self
            .config
            .lock()
            .map_err(|_| StoreError::Store("trust config store mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, record: &StoredTrustConfig) -> Result<(), StoreError> {
        let mut guard = self
            .config
            .lock()
            .map_err(|_| StoreError::Store("trust config store mutex poisoned".to_string()))?;
        *guard = Some(record.clone());
        drop(guard);
        Ok(())
    }
}

impl RequestStore for InMemoryTrustStore {
    fn list(&self) -> Result<Vec<DocumentRequest>, StoreError> {
        let mut requests = self
            .requests
            .lock()
            .map_err(|_| StoreError::Store("request store mutex poisoned".to_string()))?
            .clone();
        requests.reverse();
        requests.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(requests)
    }

    fn insert(&self, request: &DocumentRequest) -> Result<(), StoreError> {
        let mut guard = self
            .requests
            .lock()
            .map_err(|_| StoreError::Store("request store mutex poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == request.id) {
            return Err(StoreError::Invalid(format!("duplicate request id {}", request.id)));
        }
        guard.push(request.clone());
        drop(guard);
        Ok(())
    }
}
