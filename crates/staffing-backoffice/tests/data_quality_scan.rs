//! End-to-end data-quality scans over collection exports on disk.
//!
//! Exports are written to a temporary directory, served through `DirectoryRecordStore`, and scanned
//! both through the service facade and the HTTP router.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use staffing_backoffice::quality::{quality_router, EntityType, QualityService, Severity};
use staffing_backoffice::storage::{load_documents, DirectoryRecordStore};

fn export_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn write_export(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, contents).expect("write export");
    path
}

const CANDIDATES_JSON: &str = r#"[
  { "_id": { "$oid": "65f0a1" }, "firstName": "jean", "lastName": "Dupont", "email": "JEAN@TEST.COM" },
  { "_id": { "$oid": "65f0a2" }, "firstName": "Jean", "lastName": "Dupont", "email": "jean@test.com ", "state": "embauche", "contractType": "cdi" },
  { "_id": { "$oid": "65f0a3" }, "firstName": "", "lastName": "Martin", "state": "qualifie" }
]"#;

const CONSULTANTS_JSONL: &str = "\
{\"_id\": \"k1\", \"firstName\": \"Marie\", \"lastName\": \"Curie\", \"email\": \"marie@lab.fr\", \"contractType\": \"freelance\"}
{\"_id\": \"k2\", \"firstName\": \"Pierre\", \"lastName\": \"Curie\", \"email\": \"pierre@lab.fr\", \"contractType\": \"interim\", \"phone\": \"0033 6 11 22 33 44\"}
";

const JOBS_CSV: &str = "\
_id,title,client,jobFamily,published,active
j1,Data Engineer,Acme,data,true,true
j2,data engineer,Globex,,false,true
j3,Chef de projet,,gestion_projet,true,false
";

fn seeded_store(dir: &TempDir) -> DirectoryRecordStore {
    write_export(dir, "candidates.json", CANDIDATES_JSON);
    write_export(dir, "consultants.jsonl", CONSULTANTS_JSONL);
    write_export(dir, "jobs.csv", JOBS_CSV);
    DirectoryRecordStore::new(dir.path())
}

#[test]
fn candidate_export_reports_normalization_and_duplicates() {
    let dir = export_dir();
    let service = QualityService::new(Arc::new(seeded_store(&dir)));

    let report = service.scan(EntityType::Candidate).expect("scan succeeds");

    let first: Vec<(&str, Severity, Option<&str>)> = report
        .issues_for("65f0a1")
        .map(|issue| (issue.field, issue.severity, issue.suggested_value.as_deref()))
        .collect();
    assert_eq!(
        first,
        vec![
            ("email", Severity::Info, Some("jean@test.com")),
            ("firstName", Severity::Info, Some("Jean")),
            ("state", Severity::Warning, Some("a_qualifier")),
        ]
    );

    let second: Vec<_> = report.issues_for("65f0a2").collect();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].field, "email");

    let third: Vec<_> = report.issues_for("65f0a3").collect();
    assert_eq!(third.len(), 1);
    assert_eq!(third[0].severity, Severity::Error);

    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].key, "jean@test.com");
    assert_eq!(report.duplicates[0].len(), 2);
}

#[test]
fn full_scan_covers_json_lines_and_csv_exports() {
    let dir = export_dir();
    let service = QualityService::new(Arc::new(seeded_store(&dir)));

    let report = service.scan_all().expect("scan succeeds");
    let summary = report.summary();

    let consultants = &summary.by_entity[&EntityType::Consultant];
    assert_eq!(consultants.by_severity.warning, 1);
    assert_eq!(consultants.by_severity.info, 1);
    let phone = report
        .issues_for("k2")
        .find(|issue| issue.field == "phone")
        .expect("phone hint");
    assert_eq!(phone.suggested_value.as_deref(), Some("+33611223344"));

    let jobs = &summary.by_entity[&EntityType::Job];
    assert_eq!(jobs.by_severity.error, 1);
    assert_eq!(jobs.by_severity.info, 1);
    assert_eq!(jobs.duplicate_groups, 1);

    assert_eq!(summary.total_issues, report.issues.len());
    assert_eq!(summary.duplicate_groups, 2);
    assert!(!summary.is_clean());
}

#[test]
fn cli_loader_reads_the_same_exports() {
    let dir = export_dir();
    let path = write_export(&dir, "jobs.csv", JOBS_CSV);

    let documents = load_documents(&path).expect("csv export loads");
    assert_eq!(documents.len(), 3);
    assert!(documents[1].get("jobFamily").is_none());
    assert_eq!(documents[2]["published"], "true");
}

#[tokio::test]
async fn http_scan_reads_from_the_directory_store() {
    let dir = export_dir();
    let service = Arc::new(QualityService::new(Arc::new(seeded_store(&dir))));

    let response = quality_router(service)
        .oneshot(
            Request::get("/api/v1/quality/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["entityType"], "job");
    assert_eq!(payload["duplicates"][0]["keyField"], "title");
    assert_eq!(payload["duplicates"][0]["key"], "data engineer");
}

#[tokio::test]
async fn missing_export_makes_the_scan_unavailable() {
    let dir = export_dir();
    let service = Arc::new(QualityService::new(Arc::new(DirectoryRecordStore::new(dir.path()))));

    let response = quality_router(service)
        .oneshot(Request::get("/api/v1/quality").body(Body::empty()).unwrap())
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
