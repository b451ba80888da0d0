//! Role resolution from the recruitment lifecycle through to permission checks.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use staffing_backoffice::candidates::{candidate_role, Candidate, CandidateStatus};
use staffing_backoffice::roles::{
    access_router, has_permission, is_bureau_role, is_terrain_role, role_category, Permission,
    Role, RoleCategory,
};

fn hired(contract_type: Option<&str>) -> Candidate {
    Candidate {
        first_name: "Camille".to_string(),
        last_name: "Martin".to_string(),
        email: Some("camille.martin@example.fr".to_string()),
        phone: None,
        job_family: None,
        modules: Vec::new(),
        years_of_experience: Some(4),
        status: CandidateStatus::Embauche,
        contract_type: contract_type.map(str::to_string),
    }
}

#[test]
fn hired_candidates_land_in_terrain_roles_with_portal_access() {
    for (contract, expected, portal) in [
        ("cdi", Role::ConsultantCdi, "consultantPortal"),
        ("freelance", Role::Freelance, "freelancePortal"),
    ] {
        let role = candidate_role(&hired(Some(contract))).expect("hired with contract");
        assert_eq!(role, expected);
        assert!(is_terrain_role(role.as_str()));
        assert!(!is_bureau_role(role.as_str()));
        assert!(has_permission(role.as_str(), portal));
        assert!(has_permission(role.as_str(), "timesheets"));
        assert!(!has_permission(role.as_str(), "dataQuality"));
    }
}

#[test]
fn pipeline_candidates_keep_the_candidate_portal_only() {
    let mut candidate = hired(Some("cdi"));
    candidate.status = CandidateStatus::Entretien;

    let role = candidate_role(&candidate).expect("contract ignored before hiring");
    assert_eq!(role, Role::Candidat);

    let granted = role.permissions().granted();
    assert_eq!(
        granted,
        vec![Permission::CandidatePortal, Permission::ViewAssignedOnly]
    );
}

#[test]
fn data_quality_is_restricted_to_admin_and_hr() {
    let allowed: Vec<Role> = Role::ordered()
        .into_iter()
        .filter(|role| has_permission(role.as_str(), "dataQuality"))
        .collect();
    assert_eq!(allowed, vec![Role::Admin, Role::Rh]);
    assert_eq!(role_category("rh"), Some(RoleCategory::Bureau));
}

#[tokio::test]
async fn permission_endpoint_agrees_with_the_lookup_functions() {
    for (role, permission) in [
        ("sourceur", "scraper"),
        ("sourceur", "canExportData"),
        ("commercial", "canValidateTimesheets"),
        ("ghost", "dashboard"),
        ("admin", "teleport"),
    ] {
        let response = access_router()
            .oneshot(
                Request::get(format!("/api/v1/roles/{role}/permissions/{permission}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(
            payload["allowed"].as_bool(),
            Some(has_permission(role, permission)),
            "{role}/{permission}"
        );
    }
}
