use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::records::{EntityRecords, RecordError};
use super::{EntityType, QualityReport};
use crate::storage::{RecordStore, StoreError};

/// Service running quality scans against a record store.
pub struct QualityService<S> {
    store: Arc<S>,
}

#[derive(Debug, thiserror::Error)]
pub enum QualityServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Records(#[from] RecordError),
}

impl<S> QualityService<S>
where
    S: RecordStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Scan the stored collection for one entity type.
    pub fn scan(&self, entity_type: EntityType) -> Result<QualityReport, QualityServiceError> {
        let documents = self.store.fetch(entity_type).map_err(|error| {
            warn!(entity_type = %entity_type, %error, "record store fetch failed");
            error
        })?;

        let report = self.scan_documents(entity_type, documents)?;
        info!(
            entity_type = %entity_type,
            issues = report.issues.len(),
            duplicate_groups = report.duplicates.len(),
            "quality scan completed"
        );
        Ok(report)
    }

    /// Scan every entity type. Any fetch failure fails the whole run.
    pub fn scan_all(&self) -> Result<QualityReport, QualityServiceError> {
        let mut report = QualityReport::default();
        for entity_type in EntityType::ordered() {
            report.merge(self.scan(entity_type)?);
        }
        Ok(report)
    }

    /// Scan documents supplied by the caller instead of the store.
    pub fn scan_documents(
        &self,
        entity_type: EntityType,
        documents: Vec<Value>,
    ) -> Result<QualityReport, QualityServiceError> {
        let records = EntityRecords::from_documents(entity_type, documents)?;
        debug!(entity_type = %entity_type, records = records.len(), "scanning records");
        Ok(records.analyze())
    }
}
