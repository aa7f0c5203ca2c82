// crates/trust-center-core/tests/service.rs
// ============================================================================
// Module: Trust Center Service Tests
// Description: Service behavior over in-memory and failing stores.
// Purpose: Validate save rules, public fallbacks, and request intake.
// ============================================================================

//! ## Overview
//! Integration tests for [`TrustCenterService`]:
//! - Blank and invalid YAML never reaches storage
//! - Public reads fall back to the built-in template
//! - Request validation failures never reach storage
//! - Requests list newest first

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use serde_json::json;
use trust_center_core::ConfigFallback;
use trust_center_core::DEFAULT_TRUST_YAML;
use trust_center_core::DocumentRequest;
use trust_center_core::InMemoryTrustStore;
use trust_center_core::RequestStatus;
use trust_center_core::RequestStore;
use trust_center_core::ServiceError;
use trust_center_core::SharedRequestStore;
use trust_center_core::SharedTrustConfigStore;
use trust_center_core::StoreError;
use trust_center_core::StoredTrustConfig;
use trust_center_core::TrustCenterService;
use trust_center_core::TrustConfigStore;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Valid replacement document.
const ACME_YAML: &str = "\
theme: dark
company:
  name: Acme
  tagline: Secure rockets
  description: Acme builds rockets.
documents: []
";

/// Store that fails every call and counts writes.
#[derive(Default)]
struct FailingStore {
    /// Number of write attempts.
    writes: AtomicUsize,
}

impl TrustConfigStore for FailingStore {
    fn load(&self) -> Result<Option<StoredTrustConfig>, StoreError> {
        Err(StoreError::Io("disk unavailable".to_string()))
    }

    fn save(&self, _record: &StoredTrustConfig) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io("disk unavailable".to_string()))
    }
}

impl RequestStore for FailingStore {
    fn list(&self) -> Result<Vec<DocumentRequest>, StoreError> {
        Err(StoreError::Io("disk unavailable".to_string()))
    }

    fn insert(&self, _request: &DocumentRequest) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io("disk unavailable".to_string()))
    }
}

fn memory_service() -> (TrustCenterService, InMemoryTrustStore) {
    let store = InMemoryTrustStore::new();
    let service = TrustCenterService::new(
        SharedTrustConfigStore::from_store(store.clone()),
        SharedRequestStore::from_store(store.clone()),
    )
    .expect("service");
    (service, store)
}

fn failing_service() -> (TrustCenterService, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    let service = TrustCenterService::new(
        SharedTrustConfigStore::new(store.clone()),
        SharedRequestStore::new(store.clone()),
    )
    .expect("service");
    (service, store)
}

fn valid_request() -> serde_json::Value {
    json!({
        "email": "buyer@prospect.io",
        "document": "SOC 2 report",
        "company": "Prospect",
        "message": "Evaluating vendors.",
    })
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

#[test]
fn stored_config_defaults_to_template() {
    let (service, _) = memory_service();
    let stored = service.stored_config().expect("stored config");
    assert_eq!(stored.yaml, DEFAULT_TRUST_YAML);
    assert!(stored.updated_at.is_none());
}

#[test]
fn saved_config_is_served_publicly() {
    let (service, store) = memory_service();
    let saved = service.save_config(ACME_YAML).expect("save");
    assert!(saved.updated_at.is_some());
    assert_eq!(store.load().expect("load"), Some(saved));
    let loaded = service.public_config();
    assert!(loaded.fallback.is_none());
    assert_eq!(loaded.config.company.name, "Acme");
    let (page, fallback) = service.public_page();
    assert!(fallback.is_none());
    assert_eq!(page.title, "Acme Trust Center");
}

#[test]
fn blank_yaml_is_rejected_before_parsing() {
    let (service, failing) = failing_service();
    for payload in ["", "   \n\t"] {
        let err = service.save_config(payload).expect_err("blank yaml");
        assert_eq!(err, ServiceError::Invalid("YAML payload cannot be empty.".to_string()));
    }
    assert_eq!(failing.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn invalid_yaml_is_rejected_with_field_messages() {
    let (service, store) = memory_service();
    let err = service.save_config("theme: dark\n").expect_err("missing company");
    assert_eq!(err, ServiceError::Invalid("company: Required".to_string()));
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn storage_failure_on_save_is_reported() {
    let (service, failing) = failing_service();
    let err = service.save_config(ACME_YAML).expect_err("store down");
    assert!(matches!(err, ServiceError::Storage(StoreError::Io(_))));
    assert_eq!(failing.writes.load(Ordering::SeqCst), 1);
}

#[test]
fn public_config_falls_back_when_store_fails() {
    let (service, _) = failing_service();
    let loaded = service.public_config();
    assert_eq!(loaded.config.company.name, "EzTrust");
    assert!(matches!(loaded.fallback, Some(ConfigFallback::StorageFailure(_))));
    assert!(service.stored_config().is_err());
}

#[test]
fn public_config_falls_back_when_stored_yaml_is_invalid() {
    let (service, store) = memory_service();
    store
        .save(&StoredTrustConfig {
            yaml: "company: 3\n".to_string(),
            updated_at: None,
        })
        .expect("seed");
    let loaded = service.public_config();
    assert_eq!(loaded.config, *service.default_config());
    let fallback = loaded.fallback.expect("fallback reason");
    assert_eq!(fallback.kind(), "invalid_stored");
    assert_eq!(fallback.detail(), "company: Expected object, received number");
}

// ============================================================================
// SECTION: Requests
// ============================================================================

#[test]
fn submitted_requests_are_listed_newest_first() {
    let (service, _) = memory_service();
    let first = service.submit_request(&valid_request()).expect("first");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = service.submit_request(&valid_request()).expect("second");
    assert_eq!(first.status, RequestStatus::Pending);
    assert_ne!(first.id, second.id);
    let listed = service.list_requests().expect("list");
    assert_eq!(listed, vec![second, first]);
}

#[test]
fn invalid_request_never_reaches_storage() {
    let (service, failing) = failing_service();
    let mut payload = valid_request();
    payload["email"] = json!("not-an-email");
    let err = service.submit_request(&payload).expect_err("invalid email");
    assert_eq!(err, ServiceError::Invalid("email: Invalid email".to_string()));
    payload["email"] = json!("buyer@prospect.io");
    payload["message"] = json!("x".repeat(501));
    assert!(matches!(service.submit_request(&payload), Err(ServiceError::Invalid(_))));
    assert_eq!(failing.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn request_storage_failure_is_reported() {
    let (service, failing) = failing_service();
    let err = service.submit_request(&valid_request()).expect_err("store down");
    assert!(matches!(err, ServiceError::Storage(_)));
    assert_eq!(failing.writes.load(Ordering::SeqCst), 1);
    assert!(service.list_requests().is_err());
}
