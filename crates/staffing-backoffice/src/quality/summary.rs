use serde::Serialize;
use std::collections::BTreeMap;

use super::issues::Severity;
use super::{EntityType, QualityReport};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.error += 1,
            Severity::Warning => self.warning += 1,
            Severity::Info => self.info += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityQualityCounts {
    pub issues: usize,
    pub by_severity: SeverityCounts,
    pub duplicate_groups: usize,
    pub duplicate_records: usize,
}

/// Tallies over a report's issue and duplicate lists.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySummary {
    pub total_issues: usize,
    pub by_severity: SeverityCounts,
    pub by_entity: BTreeMap<EntityType, EntityQualityCounts>,
    pub duplicate_groups: usize,
    pub duplicate_records: usize,
}

impl QualitySummary {
    pub(crate) fn tally(report: &QualityReport) -> Self {
        let mut summary = Self::default();

        for issue in &report.issues {
            summary.total_issues += 1;
            summary.by_severity.record(issue.severity);

            let entity = summary.by_entity.entry(issue.entity_type).or_default();
            entity.issues += 1;
            entity.by_severity.record(issue.severity);
        }

        for group in &report.duplicates {
            summary.duplicate_groups += 1;
            summary.duplicate_records += group.len();

            let entity = summary.by_entity.entry(group.entity_type).or_default();
            entity.duplicate_groups += 1;
            entity.duplicate_records += group.len();
        }

        summary
    }

    /// True when the scan found no blocking errors.
    pub fn is_clean(&self) -> bool {
        self.by_severity.error == 0
    }
}
