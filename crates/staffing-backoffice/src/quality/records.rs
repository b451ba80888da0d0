//! Typed view over loosely typed collection documents.
//!
//! Documents come from exports and HTTP payloads where any field may be missing, `null`, or of
//! an unexpected JSON type. Every field is therefore optional, and scalar fields are coerced
//! leniently so that a stray number or boolean never aborts a scan.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::issues::non_blank;
use super::EntityType;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("document #{index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("document #{index} could not be read: {source}")]
    Invalid {
        index: usize,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "document_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_family: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contract_type: Option<String>,
}

impl CandidateRecord {
    /// Pipeline state, read from `state` and falling back to the older `status` key when
    /// `state` is missing or blank.
    pub fn pipeline_state(&self) -> Option<&str> {
        non_blank(self.state.as_deref()).or(non_blank(self.status.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantRecord {
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "document_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "document_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_family: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: Option<bool>,
}

/// A whole collection, typed by entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRecords {
    Candidates(Vec<CandidateRecord>),
    Consultants(Vec<ConsultantRecord>),
    Jobs(Vec<JobRecord>),
}

impl EntityRecords {
    pub fn from_documents(
        entity_type: EntityType,
        documents: Vec<Value>,
    ) -> Result<Self, RecordError> {
        Ok(match entity_type {
            EntityType::Candidate => Self::Candidates(decode_all(documents)?),
            EntityType::Consultant => Self::Consultants(decode_all(documents)?),
            EntityType::Job => Self::Jobs(decode_all(documents)?),
        })
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Candidates(_) => EntityType::Candidate,
            Self::Consultants(_) => EntityType::Consultant,
            Self::Jobs(_) => EntityType::Job,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Candidates(records) => records.len(),
            Self::Consultants(records) => records.len(),
            Self::Jobs(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode_all<T>(documents: Vec<Value>) -> Result<Vec<T>, RecordError>
where
    T: for<'de> Deserialize<'de>,
{
    documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| {
            if !document.is_object() {
                return Err(RecordError::NotAnObject { index });
            }
            serde_json::from_value(document).map_err(|source| RecordError::Invalid { index, source })
        })
        .collect()
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        Some(Value::Number(value)) => Some(value.to_string()),
        Some(Value::Bool(value)) => Some(value.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(value)) => Some(value),
        Some(Value::Number(value)) => match value.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Some(Value::String(value)) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "oui" => Some(true),
            "false" | "0" | "no" | "non" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Accepts plain string or numeric ids and MongoDB extended JSON (`{"$oid": "..."}`).
fn document_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value),
        Some(Value::Number(value)) => Some(value.to_string()),
        Some(Value::Object(map)) => map
            .get("$oid")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_are_read_from_extended_json_strings_and_numbers() {
        let records = EntityRecords::from_documents(
            EntityType::Job,
            vec![
                json!({ "_id": { "$oid": "65f1c0ffee" }, "title": "Dev" }),
                json!({ "id": 42, "title": "Ops" }),
                json!({ "_id": "job-7", "id": "legacy-7" }),
                json!({ "title": "No id" }),
            ],
        )
        .expect("documents decode");

        let EntityRecords::Jobs(jobs) = records else {
            panic!("expected job records");
        };
        assert_eq!(jobs[0].mongo_id.as_deref(), Some("65f1c0ffee"));
        assert_eq!(jobs[1].id.as_deref(), Some("42"));
        assert_eq!(jobs[2].mongo_id.as_deref(), Some("job-7"));
        assert_eq!(jobs[2].id.as_deref(), Some("legacy-7"));
        assert!(jobs[3].mongo_id.is_none() && jobs[3].id.is_none());
    }

    #[test]
    fn scalar_fields_are_coerced_and_nulls_read_as_missing() {
        let records = EntityRecords::from_documents(
            EntityType::Consultant,
            vec![json!({
                "firstName": null,
                "lastName": 12,
                "phone": 612345678,
                "active": "false",
                "available": 1,
                "contractType": ["cdi"]
            })],
        )
        .expect("documents decode");

        let EntityRecords::Consultants(consultants) = records else {
            panic!("expected consultant records");
        };
        let consultant = &consultants[0];
        assert_eq!(consultant.first_name, None);
        assert_eq!(consultant.last_name.as_deref(), Some("12"));
        assert_eq!(consultant.phone.as_deref(), Some("612345678"));
        assert_eq!(consultant.active, Some(false));
        assert_eq!(consultant.available, Some(true));
        assert_eq!(consultant.contract_type, None);
    }

    #[test]
    fn candidate_state_falls_back_to_status_key() {
        let records = EntityRecords::from_documents(
            EntityType::Candidate,
            vec![json!({ "status": "entretien" }), json!({ "state": "qualifie", "status": "x" })],
        )
        .expect("documents decode");

        let EntityRecords::Candidates(candidates) = records else {
            panic!("expected candidate records");
        };
        assert_eq!(candidates[0].pipeline_state(), Some("entretien"));
        assert_eq!(candidates[1].pipeline_state(), Some("qualifie"));
    }

    #[test]
    fn blank_state_does_not_hide_status_key() {
        let records = EntityRecords::from_documents(
            EntityType::Candidate,
            vec![
                json!({ "firstName": "Jean", "lastName": "Dupont", "state": "", "status": "qualifie" }),
                json!({ "state": "  ", "status": null }),
            ],
        )
        .expect("documents decode");

        let EntityRecords::Candidates(candidates) = &records else {
            panic!("expected candidate records");
        };
        assert_eq!(candidates[0].pipeline_state(), Some("qualifie"));
        assert_eq!(candidates[1].pipeline_state(), None);

        let report = records.analyze();
        assert!(report.issues_for("#1").all(|issue| issue.field != "state"));
        assert!(report.issues_for("#2").any(|issue| issue.field == "state"));
    }

    #[test]
    fn non_object_documents_fail_the_whole_collection() {
        let error = EntityRecords::from_documents(
            EntityType::Candidate,
            vec![json!({ "firstName": "Jean" }), json!("Jean Dupont")],
        )
        .expect_err("string document rejected");

        assert!(matches!(error, RecordError::NotAnObject { index: 1 }));
    }
}
