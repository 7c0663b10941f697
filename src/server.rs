//! HTTP surface of the gateway.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::orchestrator::{TranslateError, TranslationService};
use crate::request::TranslationRequest;

pub fn build_router(service: Arc<TranslationService>) -> Router {
    Router::new()
        .route("/transperfect-api/validate", post(validate_translate))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}

/// POST /transperfect-api/validate
///
/// 200 with the translated text, 400 with the validation message when the
/// request is rejected, 502 when the provider call fails.
async fn validate_translate(
    State(service): State<Arc<TranslationService>>,
    Json(request): Json<TranslationRequest>,
) -> Response {
    match service.handle(&request).await {
        Ok(translated) => (StatusCode::OK, translated).into_response(),
        Err(TranslateError::Validation(failure)) => {
            warn!("Rejected translation request: {}", failure);
            (StatusCode::BAD_REQUEST, failure.to_string()).into_response()
        }
        Err(TranslateError::Upstream(e)) => {
            error!("Translate call failed upstream: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}
