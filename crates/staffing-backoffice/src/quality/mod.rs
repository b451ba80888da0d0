//! Data-quality scan over candidate, consultant and job collections.
//!
//! The scan is read-only and single-pass: required fields, formats, canonical forms,
//! categorical values and cross-field heuristics are checked per record, then records are
//! grouped by a normalized key to surface duplicates. Findings are reports, never failures.

mod duplicates;
mod issues;
pub mod records;
pub mod router;
mod rules;
pub mod service;
mod summary;

pub use duplicates::{DuplicateGroup, DuplicateMember};
pub use issues::{DataQualityIssue, Severity};
pub use records::{CandidateRecord, ConsultantRecord, EntityRecords, JobRecord, RecordError};
pub use router::quality_router;
pub use service::{QualityService, QualityServiceError};
pub use summary::{EntityQualityCounts, QualitySummary, SeverityCounts};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use issues::RecordChecks;
use rules::QualityRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Candidate,
    Consultant,
    Job,
}

impl EntityType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Candidate, Self::Consultant, Self::Job]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Consultant => "consultant",
            Self::Job => "job",
        }
    }

    /// Storage collection holding this entity's documents.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Candidate => "candidates",
            Self::Consultant => "consultants",
            Self::Job => "jobs",
        }
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|entity| entity.as_str() == lowered || entity.collection() == lowered)
            .ok_or_else(|| UnknownEntityType(value.to_string()))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown entity type '{0}', expected candidate, consultant or job")]
pub struct UnknownEntityType(pub String);

/// Issues and duplicate groups found by a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub issues: Vec<DataQualityIssue>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl QualityReport {
    pub fn summary(&self) -> QualitySummary {
        QualitySummary::tally(self)
    }

    pub fn merge(&mut self, other: QualityReport) {
        self.issues.extend(other.issues);
        self.duplicates.extend(other.duplicates);
    }

    pub fn issues_for<'a>(
        &'a self,
        entity_id: &'a str,
    ) -> impl Iterator<Item = &'a DataQualityIssue> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.entity_id == entity_id)
    }
}

impl EntityRecords {
    pub fn analyze(&self) -> QualityReport {
        let entity_type = self.entity_type();
        match self {
            Self::Candidates(records) => scan(entity_type, records),
            Self::Consultants(records) => scan(entity_type, records),
            Self::Jobs(records) => scan(entity_type, records),
        }
    }
}

/// Decodes raw documents at the storage boundary and scans them.
pub fn analyze_quality(
    entity_type: EntityType,
    documents: Vec<Value>,
) -> Result<QualityReport, RecordError> {
    Ok(EntityRecords::from_documents(entity_type, documents)?.analyze())
}

fn scan<R: QualityRecord>(entity_type: EntityType, records: &[R]) -> QualityReport {
    let mut issues = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let mut checks = RecordChecks::new(entity_type, entity_id(record, position), &mut issues);
        record.inspect(&mut checks);
    }

    QualityReport {
        issues,
        duplicates: duplicates::find_duplicates(entity_type, records),
    }
}

/// Stored id, or the 1-based position for records without one.
fn entity_id<R: QualityRecord>(record: &R, position: usize) -> String {
    match record.record_id() {
        Some(id) => id.to_string(),
        None => format!("#{}", position + 1),
    }
}
