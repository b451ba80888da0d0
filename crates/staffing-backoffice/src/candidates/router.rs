use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{pipeline, Candidate, Seniority};
use super::candidate_role;
use crate::roles::{Role, RoleCategory};

pub fn candidate_router() -> Router {
    Router::new()
        .route("/api/v1/candidates/pipeline", get(pipeline_handler))
        .route("/api/v1/candidates/role", post(role_handler))
}

#[derive(Debug, Serialize)]
pub struct CandidateRoleView {
    pub role: Role,
    pub role_label: &'static str,
    pub category: RoleCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Seniority>,
}

pub(crate) async fn pipeline_handler() -> Response {
    (StatusCode::OK, axum::Json(pipeline())).into_response()
}

pub(crate) async fn role_handler(axum::Json(candidate): axum::Json<Candidate>) -> Response {
    match candidate_role(&candidate) {
        Ok(role) => {
            let view = CandidateRoleView {
                role,
                role_label: role.label(),
                category: role.category(),
                seniority: candidate.seniority(),
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
