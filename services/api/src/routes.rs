use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use staffing_backoffice::candidates::candidate_router;
use staffing_backoffice::quality::{quality_router, QualityService};
use staffing_backoffice::roles::access_router;
use staffing_backoffice::storage::RecordStore;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Full API surface: role catalog, candidate lifecycle, quality scans and operational probes.
pub(crate) fn with_backoffice_routes<S>(quality: Arc<QualityService<S>>) -> Router
where
    S: RecordStore + 'static,
{
    access_router()
        .merge(candidate_router())
        .merge(quality_router(quality))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
