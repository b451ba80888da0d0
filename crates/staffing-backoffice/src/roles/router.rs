use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{
    has_permission, role_definition, roles_by_category, Permission, RoleCategory, RoleDefinition,
};

/// Read-only endpoints over the role catalog.
pub fn access_router() -> Router {
    Router::new()
        .route("/api/v1/roles", get(list_handler))
        .route("/api/v1/roles/:role", get(definition_handler))
        .route(
            "/api/v1/roles/:role/permissions/:permission",
            get(permission_handler),
        )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RoleListQuery {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleView {
    #[serde(flatten)]
    pub definition: &'static RoleDefinition,
    pub granted: Vec<Permission>,
}

impl From<&'static RoleDefinition> for RoleView {
    fn from(definition: &'static RoleDefinition) -> Self {
        Self {
            definition,
            granted: definition.permissions.granted(),
        }
    }
}

pub(crate) async fn list_handler(Query(query): Query<RoleListQuery>) -> Response {
    let categories = match query.category.as_deref() {
        Some(raw) => match RoleCategory::parse(raw) {
            Ok(category) => vec![category],
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
        None => RoleCategory::ordered().to_vec(),
    };

    let roles: Vec<RoleView> = categories
        .into_iter()
        .flat_map(roles_by_category)
        .map(RoleView::from)
        .collect();

    (StatusCode::OK, axum::Json(roles)).into_response()
}

pub(crate) async fn definition_handler(Path(role): Path<String>) -> Response {
    match role_definition(&role) {
        Some(definition) => (StatusCode::OK, axum::Json(RoleView::from(definition))).into_response(),
        None => {
            let payload = json!({ "error": format!("unknown role '{role}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn permission_handler(Path((role, permission)): Path<(String, String)>) -> Response {
    let allowed = has_permission(&role, &permission);
    let payload = json!({
        "role": role,
        "permission": permission,
        "allowed": allowed,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = access_router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn lists_every_role_without_filter() {
        let (status, body) = get_json("/api/v1/roles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn filters_roles_by_category() {
        let (status, body) = get_json("/api/v1/roles?category=terrain").await;
        assert_eq!(status, StatusCode::OK);
        let roles: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|entry| entry["role"].as_str())
            .collect();
        assert_eq!(roles, vec!["consultant_cdi", "freelance", "candidat"]);
    }

    #[tokio::test]
    async fn rejects_unknown_category() {
        let (status, body) = get_json("/api/v1/roles?category=field").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("field"));
    }

    #[tokio::test]
    async fn returns_definition_with_granted_permissions() {
        let (status, body) = get_json("/api/v1/roles/freelance").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "terrain");
        assert_eq!(body["permissions"]["consultantPortal"], true);
        assert!(body["granted"]
            .as_array()
            .unwrap()
            .contains(&Value::String("freelancePortal".into())));
    }

    #[tokio::test]
    async fn unknown_role_is_not_found() {
        let (status, _) = get_json("/api/v1/roles/superuser").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn permission_check_answers_false_for_unknowns() {
        let (status, body) = get_json("/api/v1/roles/admin/permissions/consultantPortal").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], false);

        let (_, body) = get_json("/api/v1/roles/freelance/permissions/consultantPortal").await;
        assert_eq!(body["allowed"], true);

        let (status, body) = get_json("/api/v1/roles/ghost/permissions/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], false);
    }
}
