use crate::infra::ConfiguredStore;
use clap::Args;
use staffing_backoffice::candidates::pipeline;
use staffing_backoffice::config::AppConfig;
use staffing_backoffice::error::AppError;
use staffing_backoffice::quality::router::QualityReportView;
use staffing_backoffice::quality::{
    analyze_quality, EntityType, QualityReport, QualityService, QualityServiceError, Severity,
};
use staffing_backoffice::roles::router::RoleView;
use staffing_backoffice::roles::{roles_by_category, RoleCategory};
use staffing_backoffice::storage::load_documents;
use staffing_backoffice::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct QualityArgs {
    /// Entity type to scan (candidate, consultant, job). Scans every type when omitted.
    #[arg(long)]
    pub(crate) entity: Option<EntityType>,
    /// Collection export (.json, .jsonl or .csv) to scan instead of the configured store
    #[arg(long, requires = "entity")]
    pub(crate) input: Option<PathBuf>,
    /// Read collection exports from this directory instead of APP_DATA_DIR
    #[arg(long, conflicts_with = "input")]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RolesArgs {
    /// Restrict the listing to one category (bureau or terrain)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<RoleCategory>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_category(raw: &str) -> Result<RoleCategory, String> {
    RoleCategory::parse(raw).map_err(|err| err.to_string())
}

pub(crate) fn run_quality(args: QualityArgs) -> Result<(), AppError> {
    let QualityArgs {
        entity,
        input,
        data_dir,
        json,
    } = args;

    let config = AppConfig::load()?.with_overrides(None, None, data_dir);
    telemetry::init(&config.telemetry)?;

    let report = match (input, entity) {
        (Some(path), Some(entity_type)) => {
            let documents = load_documents(&path)?;
            info!(path = %path.display(), documents = documents.len(), "export loaded");
            analyze_quality(entity_type, documents).map_err(QualityServiceError::from)?
        }
        (_, entity) => {
            let store = ConfiguredStore::from_config(&config.storage);
            info!(store = %store.describe(), "record store selected");
            let service = QualityService::new(Arc::new(store));
            match entity {
                Some(entity_type) => service.scan(entity_type)?,
                None => service.scan_all()?,
            }
        }
    };

    if json {
        match serde_json::to_string_pretty(&QualityReportView::new(entity, report)) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Quality report unavailable: {err}"),
        }
    } else {
        print!("{}", render_quality_report(&report));
    }

    Ok(())
}

pub(crate) fn run_roles(args: RolesArgs) -> Result<(), AppError> {
    let categories = match args.category {
        Some(category) => vec![category],
        None => RoleCategory::ordered().to_vec(),
    };

    if args.json {
        let roles: Vec<RoleView> = categories
            .into_iter()
            .flat_map(roles_by_category)
            .map(RoleView::from)
            .collect();
        match serde_json::to_string_pretty(&roles) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Role catalog unavailable: {err}"),
        }
        return Ok(());
    }

    for category in categories {
        println!("{} roles", category.label());
        for definition in roles_by_category(category) {
            let granted: Vec<&str> = definition
                .permissions
                .granted()
                .into_iter()
                .map(|permission| permission.as_str())
                .collect();
            println!("- {} ({})", definition.label, definition.role.as_str());
            println!("  {}", definition.description);
            println!("  permissions: {}", granted.join(", "));
        }
        println!();
    }

    Ok(())
}

pub(crate) fn run_pipeline() {
    println!("Recruitment pipeline");
    for stage in pipeline() {
        let marker = if stage.terminal { " (terminal)" } else { "" };
        println!(
            "{}. {} [{}]{}",
            stage.position + 1,
            stage.label,
            stage.status.as_str(),
            marker
        );
    }
}

pub(crate) fn render_quality_report(report: &QualityReport) -> String {
    let summary = report.summary();
    let mut out = String::new();

    out.push_str("Data quality report\n");
    out.push_str(&format!(
        "- {} issues | {} errors | {} warnings | {} info\n",
        summary.total_issues,
        summary.by_severity.error,
        summary.by_severity.warning,
        summary.by_severity.info
    ));
    out.push_str(&format!(
        "- {} duplicate groups covering {} records\n",
        summary.duplicate_groups, summary.duplicate_records
    ));

    for (entity_type, counts) in &summary.by_entity {
        out.push_str(&format!(
            "  - {}: {} issues, {} duplicate groups\n",
            entity_type.collection(),
            counts.issues,
            counts.duplicate_groups
        ));
    }

    for severity in Severity::ordered() {
        let issues: Vec<_> = report
            .issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect();
        if issues.is_empty() {
            continue;
        }

        out.push_str(&format!("\n{} ({})\n", severity.label(), issues.len()));
        for issue in issues {
            out.push_str(&format!(
                "- {} {} {}: {}",
                issue.entity_type, issue.entity_id, issue.field, issue.issue
            ));
            match (&issue.current_value, &issue.suggested_value) {
                (Some(current), Some(suggested)) => {
                    out.push_str(&format!(" ('{current}' -> '{suggested}')"))
                }
                (Some(current), None) => out.push_str(&format!(" ('{current}')")),
                (None, Some(suggested)) => out.push_str(&format!(" (suggest '{suggested}')")),
                (None, None) => {}
            }
            out.push('\n');
        }
    }

    if report.duplicates.is_empty() {
        out.push_str("\nDuplicates: none\n");
    } else {
        out.push_str("\nDuplicates\n");
        for group in &report.duplicates {
            let members: Vec<String> = group
                .members
                .iter()
                .map(|member| format!("{} ({})", member.label, member.entity_id))
                .collect();
            out.push_str(&format!(
                "- {} {} '{}': {}\n",
                group.entity_type,
                group.key_field,
                group.key,
                members.join(", ")
            ));
        }
    }

    out
}
