use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::duplicates::DuplicateGroup;
use super::issues::DataQualityIssue;
use super::service::{QualityService, QualityServiceError};
use super::summary::QualitySummary;
use super::{EntityType, QualityReport};
use crate::storage::{RecordStore, StoreError};

/// Router builder exposing on-demand and store-backed quality scans.
pub fn quality_router<S>(service: Arc<QualityService<S>>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        .route("/api/v1/quality", get(scan_all_handler::<S>))
        .route(
            "/api/v1/quality/:entity_type",
            get(scan_handler::<S>).post(analyze_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReportView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    pub generated_at: DateTime<Utc>,
    pub summary: QualitySummary,
    pub issues: Vec<DataQualityIssue>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl QualityReportView {
    pub fn new(entity_type: Option<EntityType>, report: QualityReport) -> Self {
        Self {
            entity_type,
            generated_at: Utc::now(),
            summary: report.summary(),
            issues: report.issues,
            duplicates: report.duplicates,
        }
    }
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<QualityService<S>>>,
    Path(entity_type): Path<String>,
    axum::Json(body): axum::Json<Value>,
) -> Response
where
    S: RecordStore + 'static,
{
    let entity_type = match entity_type.parse::<EntityType>() {
        Ok(entity_type) => entity_type,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, error.to_string()),
    };

    let Value::Array(documents) = body else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "request body must be a JSON array of documents",
        );
    };

    match service.scan_documents(entity_type, documents) {
        Ok(report) => report_response(Some(entity_type), report),
        Err(error @ QualityServiceError::Records(_)) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn scan_handler<S>(
    State(service): State<Arc<QualityService<S>>>,
    Path(entity_type): Path<String>,
) -> Response
where
    S: RecordStore + 'static,
{
    let entity_type = match entity_type.parse::<EntityType>() {
        Ok(entity_type) => entity_type,
        Err(error) => return error_response(StatusCode::BAD_REQUEST, error.to_string()),
    };

    match service.scan(entity_type) {
        Ok(report) => report_response(Some(entity_type), report),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn scan_all_handler<S>(State(service): State<Arc<QualityService<S>>>) -> Response
where
    S: RecordStore + 'static,
{
    match service.scan_all() {
        Ok(report) => report_response(None, report),
        Err(error) => service_error_response(error),
    }
}

fn report_response(entity_type: Option<EntityType>, report: QualityReport) -> Response {
    let view = QualityReportView::new(entity_type, report);
    (StatusCode::OK, axum::Json(view)).into_response()
}

/// Status for a failed store-backed scan. Undecodable stored documents are a server fault.
fn service_error_response(error: QualityServiceError) -> Response {
    let status = match &error {
        QualityServiceError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        QualityServiceError::Store(StoreError::Malformed { .. })
        | QualityServiceError::Records(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({
        "error": message.into(),
    });
    (status, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubStore {
        candidates: Mutex<Option<Vec<Value>>>,
    }

    impl RecordStore for StubStore {
        fn fetch(&self, entity_type: EntityType) -> Result<Vec<Value>, StoreError> {
            match entity_type {
                EntityType::Candidate => self
                    .candidates
                    .lock()
                    .expect("store lock poisoned")
                    .clone()
                    .ok_or_else(|| StoreError::Unavailable("connection refused".to_string())),
                EntityType::Consultant => Ok(Vec::new()),
                EntityType::Job => Err(StoreError::Malformed {
                    collection: "jobs",
                    detail: "line 3: expected value".to_string(),
                }),
            }
        }
    }

    fn router_with(candidates: Option<Vec<Value>>) -> Router {
        let store = StubStore {
            candidates: Mutex::new(candidates),
        };
        quality_router(Arc::new(QualityService::new(Arc::new(store))))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_documents(path: &str, body: Value) -> Request<Body> {
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn posted_documents_are_analyzed() {
        let response = router_with(None)
            .oneshot(post_documents(
                "/api/v1/quality/candidates",
                json!([
                    { "_id": "c1", "firstName": "jean", "lastName": "Dupont", "email": "Jean@Test.com" },
                    { "_id": "c2", "firstName": "Jean", "lastName": "Dupont", "email": "jean@test.com ", "state": "qualifie" }
                ]),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload["entityType"], "candidate");
        assert!(payload["generatedAt"].is_string());
        assert!(payload.get("entity_type").is_none());
        assert_eq!(payload["duplicates"][0]["key"], "jean@test.com");
        assert_eq!(payload["duplicates"][0]["members"].as_array().unwrap().len(), 2);
        assert_eq!(payload["summary"]["duplicateGroups"], 1);
        assert_eq!(
            payload["summary"]["totalIssues"].as_u64().unwrap() as usize,
            payload["issues"].as_array().unwrap().len()
        );
        assert_eq!(payload["issues"][0]["entityId"], "c1");
        assert_eq!(payload["issues"][0]["field"], "email");
    }

    #[tokio::test]
    async fn unknown_entity_type_is_a_bad_request() {
        let response = router_with(None)
            .oneshot(post_documents("/api/v1/quality/timesheets", json!([])))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"].as_str().unwrap().contains("timesheets"));
    }

    #[tokio::test]
    async fn non_object_documents_are_a_bad_request() {
        let response = router_with(None)
            .oneshot(post_documents("/api/v1/quality/job", json!([{ "title": "Dev" }, 7])))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = router_with(None)
            .oneshot(post_documents("/api/v1/quality/job", json!({ "title": "Dev" })))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stored_collection_is_scanned() {
        let response = router_with(Some(vec![json!({ "lastName": "Dupont", "state": "qualifie" })]))
            .oneshot(
                Request::get("/api/v1/quality/candidate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload["issues"][0]["entityId"], "#1");
        assert_eq!(payload["issues"][0]["severity"], "error");
    }

    #[tokio::test]
    async fn undecodable_stored_documents_are_a_server_error() {
        let response = router_with(Some(vec![json!({ "lastName": "Dupont" }), json!(3)]))
            .oneshot(
                Request::get("/api/v1/quality/candidate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = read_json_body(response).await;
        assert!(payload["error"].as_str().unwrap().contains("#1"));
    }

    #[tokio::test]
    async fn unavailable_store_maps_to_service_unavailable() {
        let response = router_with(None)
            .oneshot(
                Request::get("/api/v1/quality/candidate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn full_scan_fails_when_any_collection_fails() {
        let response = router_with(Some(Vec::new()))
            .oneshot(Request::get("/api/v1/quality").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = read_json_body(response).await;
        assert!(payload["error"].as_str().unwrap().contains("jobs"));
    }
}
