use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};
use staffing_backoffice::config::StorageConfig;
use staffing_backoffice::quality::EntityType;
use staffing_backoffice::storage::{DirectoryRecordStore, RecordStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collections held in process memory, keyed by entity type.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecordStore {
    collections: Arc<Mutex<HashMap<EntityType, Vec<Value>>>>,
}

impl InMemoryRecordStore {
    pub(crate) fn seeded() -> Self {
        let store = Self::default();
        for (entity_type, documents) in demo_collections() {
            store.replace(entity_type, documents);
        }
        store
    }

    pub(crate) fn replace(&self, entity_type: EntityType, documents: Vec<Value>) {
        let mut guard = self.collections.lock().expect("record store mutex poisoned");
        guard.insert(entity_type, documents);
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch(&self, entity_type: EntityType) -> Result<Vec<Value>, StoreError> {
        let guard = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable("record store mutex poisoned".to_string()))?;
        Ok(guard.get(&entity_type).cloned().unwrap_or_default())
    }
}

/// Store selected from configuration: a directory of exports or the seeded demo data.
#[derive(Clone)]
pub(crate) enum ConfiguredStore {
    Directory(DirectoryRecordStore),
    Memory(InMemoryRecordStore),
}

impl ConfiguredStore {
    pub(crate) fn from_config(config: &StorageConfig) -> Self {
        match &config.data_dir {
            Some(dir) => Self::Directory(DirectoryRecordStore::new(dir.clone())),
            None => Self::Memory(InMemoryRecordStore::seeded()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Directory(store) => format!("directory {}", store.root().display()),
            Self::Memory(_) => "in-memory demo data".to_string(),
        }
    }
}

impl RecordStore for ConfiguredStore {
    fn fetch(&self, entity_type: EntityType) -> Result<Vec<Value>, StoreError> {
        match self {
            Self::Directory(store) => store.fetch(entity_type),
            Self::Memory(store) => store.fetch(entity_type),
        }
    }
}

/// Small mixed-quality data set served when no export directory is configured.
pub(crate) fn demo_collections() -> [(EntityType, Vec<Value>); 3] {
    [
        (
            EntityType::Candidate,
            vec![
                json!({
                    "_id": { "$oid": "6650a1c2e4b0a1b2c3d4e501" },
                    "firstName": "Camille",
                    "lastName": "Martin",
                    "email": "camille.martin@example.fr",
                    "phone": "+33612345678",
                    "state": "entretien",
                    "jobFamily": "data"
                }),
                json!({
                    "_id": { "$oid": "6650a1c2e4b0a1b2c3d4e502" },
                    "firstName": "jean-pierre",
                    "lastName": "DURAND",
                    "email": "JP.Durand@Example.fr",
                    "phone": "06 98 76 54 32",
                    "state": "embauche"
                }),
                json!({
                    "_id": { "$oid": "6650a1c2e4b0a1b2c3d4e503" },
                    "firstName": "Jean-Pierre",
                    "lastName": "Durand",
                    "email": "jp.durand@example.fr",
                    "state": "Qualifie",
                    "jobFamily": "blockchain"
                }),
                json!({
                    "_id": { "$oid": "6650a1c2e4b0a1b2c3d4e504" },
                    "firstName": "",
                    "lastName": "Petit",
                    "email": "l.petit@example",
                    "contractType": "cdi"
                }),
            ],
        ),
        (
            EntityType::Consultant,
            vec![
                json!({
                    "_id": "cons-001",
                    "firstName": "Sophie",
                    "lastName": "Bernard",
                    "email": "sophie.bernard@example.fr",
                    "phone": "+33701020304",
                    "contractType": "cdi",
                    "active": true,
                    "available": false
                }),
                json!({
                    "_id": "cons-002",
                    "firstName": "Luc",
                    "lastName": "Moreau",
                    "email": "luc.moreau@example.fr",
                    "active": false,
                    "available": true
                }),
            ],
        ),
        (
            EntityType::Job,
            vec![
                json!({
                    "_id": "job-101",
                    "title": "Data Engineer",
                    "client": "Banque Horizon",
                    "jobFamily": "data",
                    "published": true,
                    "active": true
                }),
                json!({
                    "_id": "job-102",
                    "title": "data engineer ",
                    "client": "Assurances du Nord",
                    "published": false,
                    "active": true
                }),
                json!({
                    "_id": "job-103",
                    "title": "Chef de projet SI",
                    "jobFamily": "gestion_projet"
                }),
            ],
        ),
    ]
}
