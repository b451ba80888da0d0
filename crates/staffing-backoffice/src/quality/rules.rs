use super::issues::{non_blank, RecordChecks, Severity};
use super::records::{CandidateRecord, ConsultantRecord, JobRecord};
use crate::candidates::{CandidateStatus, ContractType, JobFamily};
use crate::normalize::normalize_email;

/// Per-entity checks and duplicate key for one record type.
pub(crate) trait QualityRecord {
    /// Field the duplicate index is keyed on.
    const KEY_FIELD: &'static str;

    fn record_id(&self) -> Option<&str>;

    fn display_label(&self) -> String;

    /// Normalized duplicate key; `None` keeps the record out of the index.
    fn duplicate_key(&self) -> Option<String>;

    fn inspect(&self, checks: &mut RecordChecks<'_>);
}

impl QualityRecord for CandidateRecord {
    const KEY_FIELD: &'static str = "email";

    fn record_id(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    fn display_label(&self) -> String {
        person_label(self.first_name.as_deref(), self.last_name.as_deref())
    }

    fn duplicate_key(&self) -> Option<String> {
        email_key(self.email.as_deref())
    }

    fn inspect(&self, checks: &mut RecordChecks<'_>) {
        let has_first_name = checks.require("firstName", self.first_name.as_deref());
        let has_last_name = checks.require("lastName", self.last_name.as_deref());

        checks.email("email", self.email.as_deref());
        checks.phone("phone", self.phone.as_deref());

        if has_first_name {
            checks.name("firstName", self.first_name.as_deref());
        }
        if has_last_name {
            checks.name("lastName", self.last_name.as_deref());
        }

        let status = match non_blank(self.pipeline_state()) {
            None => {
                checks.push(
                    "state",
                    Severity::Warning,
                    "pipeline state is missing",
                    None,
                    Some(CandidateStatus::AQualifier.as_str().to_string()),
                );
                None
            }
            Some(raw) => match raw.parse::<CandidateStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    let suggestion = raw
                        .trim()
                        .to_lowercase()
                        .parse::<CandidateStatus>()
                        .ok()
                        .map(|status| status.as_str().to_string());
                    checks.push(
                        "state",
                        Severity::Warning,
                        "unknown pipeline state",
                        Some(raw),
                        suggestion,
                    );
                    None
                }
            },
        };

        check_job_family(checks, self.job_family.as_deref());

        let contract_type = non_blank(self.contract_type.as_deref());
        match (status, contract_type) {
            (Some(CandidateStatus::Embauche), None) => checks.push(
                "contractType",
                Severity::Warning,
                "hired candidate has no contract type",
                None,
                None,
            ),
            (Some(CandidateStatus::Embauche), Some(raw)) => {
                if raw.parse::<ContractType>().is_err() {
                    checks.push(
                        "contractType",
                        Severity::Warning,
                        "unknown contract type",
                        Some(raw),
                        None,
                    );
                }
            }
            (_, Some(raw)) => checks.push(
                "contractType",
                Severity::Info,
                "contract type set on a candidate that is not hired",
                Some(raw),
                None,
            ),
            (_, None) => {}
        }
    }
}

impl QualityRecord for ConsultantRecord {
    const KEY_FIELD: &'static str = "email";

    fn record_id(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    fn display_label(&self) -> String {
        person_label(self.first_name.as_deref(), self.last_name.as_deref())
    }

    fn duplicate_key(&self) -> Option<String> {
        email_key(self.email.as_deref())
    }

    fn inspect(&self, checks: &mut RecordChecks<'_>) {
        let has_first_name = checks.require("firstName", self.first_name.as_deref());
        let has_last_name = checks.require("lastName", self.last_name.as_deref());
        let has_email = checks.require("email", self.email.as_deref());

        if has_email {
            checks.email("email", self.email.as_deref());
        }
        checks.phone("phone", self.phone.as_deref());

        if has_first_name {
            checks.name("firstName", self.first_name.as_deref());
        }
        if has_last_name {
            checks.name("lastName", self.last_name.as_deref());
        }

        match non_blank(self.contract_type.as_deref()) {
            None => checks.push(
                "contractType",
                Severity::Warning,
                "contract type is missing",
                None,
                None,
            ),
            Some(raw) if raw.parse::<ContractType>().is_err() => checks.push(
                "contractType",
                Severity::Warning,
                "unknown contract type",
                Some(raw),
                None,
            ),
            Some(_) => {}
        }

        if self.active == Some(false) && self.available == Some(true) {
            checks.push(
                "available",
                Severity::Info,
                "inactive consultant is marked available",
                Some("true"),
                Some("false".to_string()),
            );
        }
    }
}

impl QualityRecord for JobRecord {
    const KEY_FIELD: &'static str = "title";

    fn record_id(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }

    fn display_label(&self) -> String {
        match (
            non_blank(self.title.as_deref()),
            non_blank(self.client.as_deref()),
        ) {
            (Some(title), Some(client)) => format!("{} ({})", title.trim(), client.trim()),
            (Some(title), None) => title.trim().to_string(),
            (None, _) => "untitled job".to_string(),
        }
    }

    fn duplicate_key(&self) -> Option<String> {
        non_blank(self.title.as_deref()).map(|title| title.trim().to_lowercase())
    }

    fn inspect(&self, checks: &mut RecordChecks<'_>) {
        checks.require("title", self.title.as_deref());
        checks.require("client", self.client.as_deref());

        check_job_family(checks, self.job_family.as_deref());

        if self.published == Some(false) && self.active == Some(true) {
            checks.push(
                "published",
                Severity::Info,
                "job is active but not published",
                Some("false"),
                None,
            );
        }
    }
}

fn check_job_family(checks: &mut RecordChecks<'_>, value: Option<&str>) {
    if let Some(raw) = non_blank(value) {
        if JobFamily::parse(raw).is_none() {
            checks.push(
                "jobFamily",
                Severity::Warning,
                "unknown job family",
                Some(raw),
                None,
            );
        }
    }
}

fn email_key(email: Option<&str>) -> Option<String> {
    non_blank(email).map(normalize_email)
}

fn person_label(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let parts: Vec<&str> = [first_name, last_name]
        .into_iter()
        .filter_map(non_blank)
        .map(str::trim)
        .collect();

    if parts.is_empty() {
        "unnamed".to_string()
    } else {
        parts.join(" ")
    }
}
