// crates/trust-center-core/src/service.rs
// ============================================================================
// Module: Trust Center Service
// Description: Orchestrates configuration storage, parsing, and request intake.
// Purpose: Provide the operations exposed by the HTTP API.
// Dependencies: thiserror, serde_json, crate::{interfaces, parse, requests, view}
// ============================================================================

//! ## Overview
//! [`TrustCenterService`] ties the stores to the pure parsing and rendering
//! layers. The built-in template is parsed once at construction; a template
//! that fails to parse is a startup error. Public reads fall back to the
//! template when the stored document is unreadable, and report why through
//! [`ConfigFallback`] so callers can log it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::interfaces::RequestStore;
use crate::interfaces::SharedRequestStore;
use crate::interfaces::SharedTrustConfigStore;
use crate::interfaces::StoreError;
use crate::interfaces::StoredTrustConfig;
use crate::interfaces::TrustConfigStore;
use crate::model::TrustCenterConfig;
use crate::parse::ParseError;
use crate::parse::parse_trust_center;
use crate::requests::DocumentRequest;
use crate::requests::generate_request_id;
use crate::requests::validate_submission;
use crate::template::DEFAULT_TRUST_YAML;
use crate::template::default_config;
use crate::timestamp::now_timestamp;
use crate::view::TrustCenterPage;
use crate::view::build_page;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Message returned when a saved YAML payload is blank.
pub const EMPTY_YAML_MESSAGE: &str = "YAML payload cannot be empty.";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Trust center service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Caller-supplied input was rejected; the message is client-safe.
    #[error("{0}")]
    Invalid(String),
    /// Underlying store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
    /// Timestamp could not be produced.
    #[error("clock error: {0}")]
    Clock(String),
    /// Built-in template failed to parse.
    #[error("default trust center template is invalid: {0}")]
    DefaultTemplate(String),
}

// ============================================================================
// SECTION: Public Config Loading
// ============================================================================

/// Reason a public read served the default template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFallback {
    /// The config store failed.
    StorageFailure(StoreError),
    /// The stored YAML no longer parses.
    InvalidStored(ParseError),
}

impl ConfigFallback {
    /// Returns a stable label for audit records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StorageFailure(_) => "storage_failure",
            Self::InvalidStored(_) => "invalid_stored",
        }
    }

    /// Returns the internal detail for audit records.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::StorageFailure(err) => err.to_string(),
            Self::InvalidStored(err) => err.to_string(),
        }
    }
}

/// Configuration served to public readers.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Parsed configuration.
    pub config: TrustCenterConfig,
    /// Set when the default template was served instead of stored YAML.
    pub fallback: Option<ConfigFallback>,
}

// ============================================================================
// SECTION: Service
// ============================================================================

/// Trust center operations over pluggable stores.
#[derive(Clone)]
pub struct TrustCenterService {
    /// Configuration document store.
    config_store: SharedTrustConfigStore,
    /// Document request store.
    request_store: SharedRequestStore,
    /// Parsed built-in template.
    default_config: TrustCenterConfig,
}

impl TrustCenterService {
    /// Creates a service and parses the built-in template.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::DefaultTemplate`] when the template is invalid.
    pub fn new(
        config_store: SharedTrustConfigStore,
        request_store: SharedRequestStore,
    ) -> Result<Self, ServiceError> {
        let default_config =
            default_config().map_err(|err| ServiceError::DefaultTemplate(err.to_string()))?;
        Ok(Self {
            config_store,
            request_store,
            default_config,
        })
    }

    /// Returns the parsed built-in template.
    #[must_use]
    pub const fn default_config(&self) -> &TrustCenterConfig {
        &self.default_config
    }

    /// Returns the stored YAML, or the template with no timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] when the store fails.
    pub fn stored_config(&self) -> Result<StoredTrustConfig, ServiceError> {
        Ok(self.config_store.load()?.unwrap_or_else(|| StoredTrustConfig {
            yaml: DEFAULT_TRUST_YAML.to_string(),
            updated_at: None,
        }))
    }

    /// Validates and persists a new YAML document, replacing the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Invalid`] for blank or invalid YAML and
    /// [`ServiceError::Storage`] when the store fails.
    pub fn save_config(&self, yaml: &str) -> Result<StoredTrustConfig, ServiceError> {
        if yaml.trim().is_empty() {
            return Err(ServiceError::Invalid(EMPTY_YAML_MESSAGE.to_string()));
        }
        parse_trust_center(yaml).map_err(|err| ServiceError::Invalid(err.to_string()))?;
        let record = StoredTrustConfig {
            yaml: yaml.to_string(),
            updated_at: Some(now_timestamp().map_err(|err| ServiceError::Clock(err.to_string()))?),
        };
        self.config_store.save(&record)?;
        Ok(record)
    }

    /// Loads the configuration for public rendering.
    ///
    /// Storage failures and unparsable stored YAML fall back to the template.
    #[must_use]
    pub fn public_config(&self) -> LoadedConfig {
        let fallback = match self.config_store.load() {
            Ok(None) => None,
            Ok(Some(record)) => match parse_trust_center(&record.yaml) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        fallback: None,
                    };
                }
                Err(err) => Some(ConfigFallback::InvalidStored(err)),
            },
            Err(err) => Some(ConfigFallback::StorageFailure(err)),
        };
        LoadedConfig {
            config: self.default_config.clone(),
            fallback,
        }
    }

    /// Builds the public page description together with any fallback reason.
    #[must_use]
    pub fn public_page(&self) -> (TrustCenterPage, Option<ConfigFallback>) {
        let loaded = self.public_config();
        (build_page(&loaded.config), loaded.fallback)
    }

    /// Lists document requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] when the store fails.
    pub fn list_requests(&self) -> Result<Vec<DocumentRequest>, ServiceError> {
        Ok(self.request_store.list()?)
    }

    /// Validates and records a document request.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Invalid`] listing field problems, or
    /// [`ServiceError::Storage`] when the store fails.
    pub fn submit_request(&self, payload: &Value) -> Result<DocumentRequest, ServiceError> {
        let submission =
            validate_submission(payload).map_err(|err| ServiceError::Invalid(err.to_string()))?;
        let created_at = now_timestamp().map_err(|err| ServiceError::Clock(err.to_string()))?;
        let request = DocumentRequest::new(submission, generate_request_id(), created_at);
        self.request_store.insert(&request)?;
        Ok(request)
    }
}
