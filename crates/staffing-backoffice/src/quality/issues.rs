use serde::{Deserialize, Serialize};

use super::EntityType;
use crate::normalize::{
    is_valid_email, is_valid_phone, normalize_email, normalize_name, normalize_phone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Error, Self::Warning, Self::Info]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// One finding on one field of one stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityIssue {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub field: &'static str,
    pub issue: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<String>,
}

/// Returns the raw value when it holds something other than whitespace.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Issue sink scoped to a single record.
pub(crate) struct RecordChecks<'a> {
    entity_type: EntityType,
    entity_id: String,
    issues: &'a mut Vec<DataQualityIssue>,
}

impl<'a> RecordChecks<'a> {
    pub(crate) fn new(
        entity_type: EntityType,
        entity_id: String,
        issues: &'a mut Vec<DataQualityIssue>,
    ) -> Self {
        Self {
            entity_type,
            entity_id,
            issues,
        }
    }

    pub(crate) fn push(
        &mut self,
        field: &'static str,
        severity: Severity,
        issue: impl Into<String>,
        current_value: Option<&str>,
        suggested_value: Option<String>,
    ) {
        self.issues.push(DataQualityIssue {
            entity_type: self.entity_type,
            entity_id: self.entity_id.clone(),
            field,
            issue: issue.into(),
            severity,
            current_value: current_value.map(str::to_string),
            suggested_value,
        });
    }

    /// Flags a missing or blank field. Returns whether the field holds a value.
    pub(crate) fn require(&mut self, field: &'static str, value: Option<&str>) -> bool {
        if non_blank(value).is_some() {
            return true;
        }
        self.push(field, Severity::Error, "required field is missing", value, None);
        false
    }

    pub(crate) fn email(&mut self, field: &'static str, value: Option<&str>) {
        let Some(raw) = non_blank(value) else {
            return;
        };

        if !is_valid_email(raw.trim()) {
            self.push(field, Severity::Warning, "invalid e-mail format", Some(raw), None);
        }

        let normalized = normalize_email(raw);
        if normalized != raw {
            self.push(
                field,
                Severity::Info,
                "e-mail is not normalized",
                Some(raw),
                Some(normalized),
            );
        }
    }

    pub(crate) fn phone(&mut self, field: &'static str, value: Option<&str>) {
        let Some(raw) = non_blank(value) else {
            return;
        };

        if !is_valid_phone(raw) {
            self.push(field, Severity::Warning, "invalid phone number", Some(raw), None);
        }

        let normalized = normalize_phone(raw);
        if normalized != raw {
            self.push(
                field,
                Severity::Info,
                "phone number is not normalized",
                Some(raw),
                Some(normalized),
            );
        }
    }

    pub(crate) fn name(&mut self, field: &'static str, value: Option<&str>) {
        let Some(raw) = non_blank(value) else {
            return;
        };

        let normalized = normalize_name(raw);
        if normalized != raw {
            self.push(
                field,
                Severity::Info,
                "name capitalization is not normalized",
                Some(raw),
                Some(normalized),
            );
        }
    }
}
