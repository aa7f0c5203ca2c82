// crates/trust-center-server/src/server.rs
// ============================================================================
// Module: Trust Center HTTP Server
// Description: axum routes for configuration, requests, and the public page.
// Purpose: Expose the trust center service over a JSON HTTP API.
// Dependencies: trust-center-core, trust-center-config, axum, tokio
// ============================================================================

//! ## Overview
//! Every response body is either `{"data": ...}` or `{"error": "..."}`.
//! Input problems return 400 with the validation message verbatim. Storage
//! problems return 500 with a fixed message and the detail goes to the audit
//! sink only. Bodies are read with a hard byte limit before JSON decoding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use bytes::Bytes;
use http_body_util::BodyExt;
use http_body_util::LengthLimitError;
use http_body_util::Limited;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use trust_center_config::AuditConfig;
use trust_center_config::StoreConfig;
use trust_center_config::StoreType;
use trust_center_config::TrustCenterServerConfig;
use trust_center_core::InMemoryTrustStore;
use trust_center_core::ServiceError;
use trust_center_core::SharedRequestStore;
use trust_center_core::SharedTrustConfigStore;
use trust_center_core::TrustCenterService;
use trust_center_store_sqlite::SqliteTrustStore;

use crate::audit::ApiAuditEvent;
use crate::audit::ApiAuditEventParams;
use crate::audit::ApiAuditSink;
use crate::audit::ConfigFallbackEvent;
use crate::audit::FileAuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::StderrAuditSink;
use crate::audit::StorageFailureEvent;
use crate::telemetry::ApiMetricEvent;
use crate::telemetry::ApiMetrics;
use crate::telemetry::ApiOutcome;
use crate::telemetry::ApiRoute;
use crate::telemetry::NoopMetrics;

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Returned when a request body is not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON.";
/// Returned when a request body exceeds `server.max_body_bytes`.
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body exceeds the configured size limit.";
/// Returned when the stored configuration cannot be read.
pub const LOAD_CONFIG_FAILED_MESSAGE: &str = "Unable to load trust center configuration.";
/// Returned when the configuration cannot be saved.
pub const SAVE_CONFIG_FAILED_MESSAGE: &str = "Unable to save trust center configuration.";
/// Returned when document requests cannot be listed.
pub const LOAD_REQUESTS_FAILED_MESSAGE: &str = "Unable to load document requests.";
/// Returned when a document request cannot be stored.
pub const SUBMIT_REQUEST_FAILED_MESSAGE: &str = "Could not register the request.";
/// Returned when a response payload cannot be serialized.
const SERIALIZATION_FAILED_MESSAGE: &str = "Unable to serialize response.";

// ============================================================================
// SECTION: Server
// ============================================================================

/// Trust center HTTP server.
pub struct TrustCenterServer {
    /// Socket address to bind.
    bind: SocketAddr,
    /// Service behind every route.
    service: TrustCenterService,
    /// Maximum accepted request body size.
    max_body_bytes: usize,
    /// Audit sink for request and failure events.
    audit: Arc<dyn ApiAuditSink>,
    /// Metrics sink.
    metrics: Arc<dyn ApiMetrics>,
}

impl TrustCenterServer {
    /// Builds a server from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the config is invalid or a store or audit
    /// sink cannot be opened.
    pub fn from_config(config: &TrustCenterServerConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let bind = config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let service = build_service(&config.store)?;
        let audit = build_audit_sink(&config.server.audit)?;
        Ok(Self::new(service, bind, config.server.max_body_bytes, audit))
    }

    /// Builds a server from parts, with no-op metrics.
    #[must_use]
    pub fn new(
        service: TrustCenterService,
        bind: SocketAddr,
        max_body_bytes: usize,
        audit: Arc<dyn ApiAuditSink>,
    ) -> Self {
        Self {
            bind,
            service,
            max_body_bytes,
            audit,
            metrics: Arc::new(NoopMetrics),
        }
    }

    /// Replaces the metrics sink.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn ApiMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Returns the configured bind address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Builds the axum router for the API.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = Arc::new(ApiState {
            service: self.service.clone(),
            max_body_bytes: self.max_body_bytes,
            audit: Arc::clone(&self.audit),
            metrics: Arc::clone(&self.metrics),
        });
        Router::new()
            .route("/api/trust-config", get(handle_get_config).post(handle_save_config))
            .route("/api/requests", get(handle_list_requests).post(handle_submit_request))
            .route("/api/trust-center", get(handle_public_page))
            .with_state(state)
    }

    /// Binds the listener and serves requests until the server stops.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.bind)
            .await
            .map_err(|err| ServerError::Transport(format!("http bind failed: {err}")))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the service over the configured store backend.
fn build_service(store: &StoreConfig) -> Result<TrustCenterService, ServerError> {
    let (configs, requests) = match store.store_type {
        StoreType::Memory => {
            let store = InMemoryTrustStore::new();
            let requests = SharedRequestStore::from_store(store.clone());
            (SharedTrustConfigStore::from_store(store), requests)
        }
        StoreType::Sqlite => {
            let sqlite_config = store
                .sqlite_config()
                .ok_or_else(|| ServerError::Config("sqlite store requires path".to_string()))?;
            let store = SqliteTrustStore::new(sqlite_config)
                .map_err(|err| ServerError::Init(err.to_string()))?;
            let requests = SharedRequestStore::from_store(store.clone());
            (SharedTrustConfigStore::from_store(store), requests)
        }
    };
    TrustCenterService::new(configs, requests).map_err(|err| ServerError::Init(err.to_string()))
}

/// Builds the audit sink from configuration.
fn build_audit_sink(audit: &AuditConfig) -> Result<Arc<dyn ApiAuditSink>, ServerError> {
    if !audit.enabled {
        return Ok(Arc::new(NoopAuditSink));
    }
    match &audit.path {
        Some(path) => {
            let sink = FileAuditSink::new(Path::new(path.trim()))
                .map_err(|err| ServerError::Init(format!("audit log open failed: {err}")))?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Handler State
// ============================================================================

/// Shared state for API handlers.
struct ApiState {
    /// Service behind every route.
    service: TrustCenterService,
    /// Maximum accepted request body size.
    max_body_bytes: usize,
    /// Audit sink.
    audit: Arc<dyn ApiAuditSink>,
    /// Metrics sink.
    metrics: Arc<dyn ApiMetrics>,
}

impl ApiState {
    /// Records audit and metrics for a reply and converts it to a response.
    fn finish(
        &self,
        route: ApiRoute,
        request_bytes: usize,
        reply: ApiReply,
        started: Instant,
    ) -> Response {
        let payload = serde_json::to_vec(&reply.body).unwrap_or_else(|_| b"{}".to_vec());
        let status = reply.status.as_u16();
        self.audit.record(&ApiAuditEvent::new(ApiAuditEventParams {
            route,
            status,
            error_kind: reply.error_kind,
            request_bytes,
            response_bytes: payload.len(),
        }));
        let event = ApiMetricEvent {
            route,
            outcome: ApiOutcome::from_status(status),
            status,
            error_kind: reply.error_kind,
            request_bytes,
            response_bytes: payload.len(),
        };
        self.metrics.record_request(event.clone());
        self.metrics.record_latency(event, started.elapsed());
        let mut response = (reply.status, payload).into_response();
        response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }

    /// Maps a service error to a reply, auditing server-side failures.
    fn service_failure(&self, route: ApiRoute, err: ServiceError, message: &str) -> ApiReply {
        match err {
            ServiceError::Invalid(detail) => {
                ApiReply::error(StatusCode::BAD_REQUEST, "invalid_input", &detail)
            }
            other => {
                let event = StorageFailureEvent::new(route, other.to_string());
                self.audit.record_storage_failure(&event);
                ApiReply::error(StatusCode::INTERNAL_SERVER_ERROR, "storage", message)
            }
        }
    }
}

/// Handler outcome before serialization.
struct ApiReply {
    /// HTTP status.
    status: StatusCode,
    /// JSON envelope.
    body: Value,
    /// Normalized error kind label.
    error_kind: Option<&'static str>,
}

impl ApiReply {
    /// Wraps a payload as `{"data": payload}`.
    fn data(status: StatusCode, payload: &impl Serialize) -> Self {
        match serde_json::to_value(payload) {
            Ok(data) => Self {
                status,
                body: json!({ "data": data }),
                error_kind: None,
            },
            Err(_) => Self::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "serialization",
                SERIALIZATION_FAILED_MESSAGE,
            ),
        }
    }

    /// Builds an `{"error": message}` reply.
    fn error(status: StatusCode, kind: &'static str, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
            error_kind: Some(kind),
        }
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// `GET /api/trust-config`.
async fn handle_get_config(State(state): State<Arc<ApiState>>) -> Response {
    let started = Instant::now();
    let route = ApiRoute::GetTrustConfig;
    let reply = match run_blocking(|| state.service.stored_config()) {
        Ok(record) => ApiReply::data(StatusCode::OK, &record),
        Err(err) => state.service_failure(route, err, LOAD_CONFIG_FAILED_MESSAGE),
    };
    state.finish(route, 0, reply, started)
}

/// `POST /api/trust-config` with body `{"yaml": "..."}`.
async fn handle_save_config(State(state): State<Arc<ApiState>>, body: Body) -> Response {
    let started = Instant::now();
    let route = ApiRoute::SaveTrustConfig;
    let (request_bytes, payload) = match read_json(body, state.max_body_bytes).await {
        Ok(parsed) => parsed,
        Err((request_bytes, reply)) => return state.finish(route, request_bytes, reply, started),
    };
    let yaml = payload.get("yaml").and_then(Value::as_str).unwrap_or_default();
    let reply = match run_blocking(|| state.service.save_config(yaml)) {
        Ok(record) => ApiReply::data(StatusCode::OK, &record),
        Err(err) => state.service_failure(route, err, SAVE_CONFIG_FAILED_MESSAGE),
    };
    state.finish(route, request_bytes, reply, started)
}

/// `GET /api/requests`.
async fn handle_list_requests(State(state): State<Arc<ApiState>>) -> Response {
    let started = Instant::now();
    let route = ApiRoute::ListRequests;
    let reply = match run_blocking(|| state.service.list_requests()) {
        Ok(requests) => ApiReply::data(StatusCode::OK, &requests),
        Err(err) => state.service_failure(route, err, LOAD_REQUESTS_FAILED_MESSAGE),
    };
    state.finish(route, 0, reply, started)
}

/// `POST /api/requests`.
async fn handle_submit_request(State(state): State<Arc<ApiState>>, body: Body) -> Response {
    let started = Instant::now();
    let route = ApiRoute::SubmitRequest;
    let (request_bytes, payload) = match read_json(body, state.max_body_bytes).await {
        Ok(parsed) => parsed,
        Err((request_bytes, reply)) => return state.finish(route, request_bytes, reply, started),
    };
    let reply = match run_blocking(|| state.service.submit_request(&payload)) {
        Ok(record) => ApiReply::data(StatusCode::CREATED, &record),
        Err(err) => state.service_failure(route, err, SUBMIT_REQUEST_FAILED_MESSAGE),
    };
    state.finish(route, request_bytes, reply, started)
}

/// `GET /api/trust-center`.
async fn handle_public_page(State(state): State<Arc<ApiState>>) -> Response {
    let started = Instant::now();
    let route = ApiRoute::PublicPage;
    let (page, fallback) = run_blocking(|| state.service.public_page());
    if let Some(fallback) = fallback {
        state.audit.record_fallback(&ConfigFallbackEvent::new(
            route,
            fallback.kind(),
            fallback.detail(),
        ));
    }
    let reply = ApiReply::data(StatusCode::OK, &page);
    state.finish(route, 0, reply, started)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a body up to `limit` bytes and decodes it as JSON.
///
/// On failure returns the bytes read so far (zero when unknown) and the reply.
async fn read_json(body: Body, limit: usize) -> Result<(usize, Value), (usize, ApiReply)> {
    let bytes = read_limited(body, limit).await.map_err(|reply| (0, reply))?;
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => Ok((bytes.len(), value)),
        Err(_) => {
            let reply =
                ApiReply::error(StatusCode::BAD_REQUEST, "invalid_json", INVALID_JSON_MESSAGE);
            Err((bytes.len(), reply))
        }
    }
}

/// Collects a body, rejecting it once it grows past `limit` bytes.
async fn read_limited(body: Body, limit: usize) -> Result<Bytes, ApiReply> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => Err(ApiReply::error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "body_too_large",
            BODY_TOO_LARGE_MESSAGE,
        )),
        Err(_) => {
            Err(ApiReply::error(StatusCode::BAD_REQUEST, "unreadable_body", INVALID_JSON_MESSAGE))
        }
    }
}

/// Runs a store-bound operation, shifting to a blocking context when available.
fn run_blocking<T>(operation: impl FnOnce() -> T) -> T {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(operation)
        }
        _ => operation(),
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Trust center server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
