// crates/trust-center-core/src/lib.rs
// ============================================================================
// Module: Trust Center Core
// Description: Configuration model, parsing, section layout, and request intake.
// Purpose: Provide the backend-agnostic logic behind the trust center.
// Dependencies: rand, serde, serde_json, serde_yaml, thiserror, time, url
// ============================================================================

//! ## Overview
//! The trust center is a public page generated from a single YAML document.
//! This crate parses that document into typed records, decides which of the
//! nine sections render and in what order, describes each section for
//! rendering, and validates document access requests from visitors.
//! Invariants:
//! - YAML is untrusted; it is decoded through an explicit validation pass and
//!   every issue is reported with its field path.
//! - Section ordering never duplicates a section and only places selected ones.
//! - Request validation failures never reach storage.
//!
//! Persistence is abstracted behind [`TrustConfigStore`] and [`RequestStore`];
//! [`InMemoryTrustStore`] is the built-in backend.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod decode;
pub mod interfaces;
pub mod model;
pub mod parse;
pub mod requests;
pub mod schema;
pub mod sections;
pub mod service;
pub mod store;
pub mod template;
pub mod timestamp;
pub mod view;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decode::FieldPath;
pub use decode::ValidationIssue;
pub use decode::ValidationReport;
pub use interfaces::RequestStore;
pub use interfaces::SharedRequestStore;
pub use interfaces::SharedTrustConfigStore;
pub use interfaces::StoreError;
pub use interfaces::StoredTrustConfig;
pub use interfaces::TrustConfigStore;
pub use model::LayoutSpan;
pub use model::SectionKey;
pub use model::TrustCenterConfig;
pub use parse::ParseError;
pub use parse::parse_trust_center;
pub use requests::DocumentRequest;
pub use requests::RequestStatus;
pub use requests::RequestValidationError;
pub use requests::validate_submission;
pub use schema::trust_center_schema;
pub use sections::SelectedSection;
pub use sections::order_sections;
pub use sections::resolve_sections;
pub use sections::select_sections;
pub use service::ConfigFallback;
pub use service::LoadedConfig;
pub use service::ServiceError;
pub use service::TrustCenterService;
pub use store::InMemoryTrustStore;
pub use template::DEFAULT_TRUST_YAML;
pub use view::TrustCenterPage;
pub use view::build_page;
