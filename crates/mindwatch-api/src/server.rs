//! Router, shared state and request handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, warn};
use uuid::Uuid;

use mindwatch_core::config::{HttpConfig, ServerConfig};
use mindwatch_core::types::{InferenceRequest, InferenceResponse, Modality};
use mindwatch_fusion::InferenceService;

use crate::error::ApiError;
use crate::protocol::{HealthResponse, RootResponse};

/// State shared by all handlers. Cloned per request.
#[derive(Debug, Clone)]
pub struct AppState {
    service: Arc<InferenceService>,
    server: Arc<ServerConfig>,
    enforce_consent: bool,
}

impl AppState {
    pub fn new(service: InferenceService, server: ServerConfig, enforce_consent: bool) -> Self {
        Self {
            service: Arc::new(service),
            server: Arc::new(server),
            enforce_consent,
        }
    }

    pub fn service(&self) -> &InferenceService {
        &self.service
    }
}

/// Build the application router.
///
/// Fails if a configured CORS origin is not a valid header value.
pub fn router(state: AppState, http: &HttpConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/infer", post(infer))
        .with_state(state)
        .layer(DefaultBodyLimit::max(http.max_payload_size))
        .layer(cors_layer(&http.cors_allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// CORS for the configured origins with credentials.
///
/// Credentials cannot be combined with wildcard methods or headers, so both
/// are mirrored from the preflight request.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{}'", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::from(state.server.as_ref()))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

async fn infer(
    State(state): State<AppState>,
    payload: Result<Json<InferenceRequest>, JsonRejection>,
) -> Result<Json<InferenceResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /infer body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "infer",
        %request_id,
        session_id = request.meta.session_id.as_deref().unwrap_or("-"),
    );

    span.in_scope(|| {
        if state.enforce_consent {
            check_consent(&request)?;
        }
        Ok(Json(state.service.infer(&request)?))
    })
}

/// Reject embeddings for modalities the client did not consent to.
fn check_consent(request: &InferenceRequest) -> Result<(), ApiError> {
    let denied: Vec<Modality> = request
        .present_embeddings()
        .present()
        .filter(|&m| !request.meta.consent.allows(m))
        .collect();

    if denied.is_empty() {
        return Ok(());
    }

    let names: Vec<&str> = denied.iter().map(|m| m.as_str()).collect();
    warn!(modalities = ?names, "Rejected embeddings without consent");
    Err(ApiError::BadRequest(format!(
        "Consent not granted for modality data: {}",
        names.join(", ")
    )))
}
