//! Access to the raw entity documents the quality analyzer scans.

mod parser;

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::quality::EntityType;

/// Source of loosely typed entity documents, one collection per entity type.
pub trait RecordStore: Send + Sync {
    fn fetch(&self, entity_type: EntityType) -> Result<Vec<Value>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("collection '{collection}' could not be parsed: {detail}")]
    Malformed {
        collection: &'static str,
        detail: String,
    },
}

/// Export format of a document file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Csv,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" | "jsonl" | "ndjson" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported export format for {0} (expected .json, .jsonl or .csv)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid JSON export: {0}")]
    Json(String),
    #[error("invalid CSV export: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a collection export from disk.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, DocumentLoadError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| DocumentLoadError::UnsupportedFormat(path.to_path_buf()))?;
    let file = File::open(path).map_err(|source| DocumentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_documents(BufReader::new(file), format)
}

pub fn read_documents<R: Read>(
    reader: R,
    format: DocumentFormat,
) -> Result<Vec<Value>, DocumentLoadError> {
    match format {
        DocumentFormat::Json => parser::parse_json_documents(reader).map_err(DocumentLoadError::Json),
        DocumentFormat::Csv => Ok(parser::parse_csv_documents(reader)?),
    }
}

/// Store backed by a directory of collection exports (`candidates.json`, `jobs.csv`, ...).
///
/// Files are re-read on every fetch so a fresh export is picked up without a restart.
#[derive(Debug, Clone)]
pub struct DirectoryRecordStore {
    root: PathBuf,
}

impl DirectoryRecordStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, entity_type: EntityType) -> Option<PathBuf> {
        let collection = entity_type.collection();
        ["json", "jsonl", "csv"]
            .into_iter()
            .map(|extension| self.root.join(format!("{collection}.{extension}")))
            .find(|candidate| candidate.is_file())
    }
}

impl RecordStore for DirectoryRecordStore {
    fn fetch(&self, entity_type: EntityType) -> Result<Vec<Value>, StoreError> {
        let collection = entity_type.collection();
        let path = self.locate(entity_type).ok_or_else(|| {
            StoreError::Unavailable(format!(
                "no export for '{collection}' in {}",
                self.root.display()
            ))
        })?;

        load_documents(&path).map_err(|error| {
            if matches!(error, DocumentLoadError::Io { .. }) {
                StoreError::Unavailable(error.to_string())
            } else {
                StoreError::Malformed {
                    collection,
                    detail: error.to_string(),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("exports/candidates.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("jobs.csv")),
            Some(DocumentFormat::Csv)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("jobs.xlsx")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("jobs")), None);
    }

    #[test]
    fn directory_store_reads_json_then_csv_exports() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            dir.path().join("candidates.json"),
            r#"[{"firstName":"jean","lastName":"Dupont"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("jobs.csv"), "title,client\nDev Rust,Acme\n").unwrap();

        let store = DirectoryRecordStore::new(dir.path());
        assert_eq!(store.fetch(EntityType::Candidate).unwrap().len(), 1);
        let jobs = store.fetch(EntityType::Job).unwrap();
        assert_eq!(jobs[0]["client"], "Acme");
    }

    #[test]
    fn missing_collection_makes_the_store_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = DirectoryRecordStore::new(dir.path());

        match store.fetch(EntityType::Consultant) {
            Err(StoreError::Unavailable(message)) => assert!(message.contains("consultants")),
            other => panic!("expected unavailable store, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_export_is_reported_as_malformed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("jobs.json"), "[{\"title\": ").unwrap();
        let store = DirectoryRecordStore::new(dir.path());

        match store.fetch(EntityType::Job) {
            Err(StoreError::Malformed { collection, .. }) => assert_eq!(collection, "jobs"),
            other => panic!("expected malformed export, got {other:?}"),
        }
    }

    #[test]
    fn load_documents_rejects_unknown_extensions() {
        match load_documents("export.xml") {
            Err(DocumentLoadError::UnsupportedFormat(path)) => {
                assert_eq!(path, PathBuf::from("export.xml"))
            }
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }
}
