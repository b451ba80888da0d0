use serde::Serialize;
use std::collections::HashMap;

use super::rules::QualityRecord;
use super::EntityType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMember {
    pub entity_id: String,
    pub label: String,
}

/// Records sharing the same normalized key value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub entity_type: EntityType,
    pub key_field: &'static str,
    pub key: String,
    pub members: Vec<DuplicateMember>,
}

impl DuplicateGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups records by duplicate key, keeping first-seen order for groups and members.
pub(crate) fn find_duplicates<R: QualityRecord>(
    entity_type: EntityType,
    records: &[R],
) -> Vec<DuplicateGroup> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let Some(key) = record.duplicate_key() else {
            continue;
        };

        let member = DuplicateMember {
            entity_id: super::entity_id(record, position),
            label: record.display_label(),
        };

        match slots.get(&key) {
            Some(&slot) => groups[slot].members.push(member),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(DuplicateGroup {
                    entity_type,
                    key_field: R::KEY_FIELD,
                    key,
                    members: vec![member],
                });
            }
        }
    }

    groups.retain(|group| group.len() > 1);
    groups
}
