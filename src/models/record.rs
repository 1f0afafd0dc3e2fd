use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable representation of one combatant, persisted as one element of the
/// roster JSON array. Identity is `id`; every other field is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredRecord {
    pub id: String,
    pub initiative: i32,
    pub name: String,
    pub hp: i32,
    pub ac: i32,
}

impl StoredRecord {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            initiative: 0,
            name: String::new(),
            hp: 0,
            ac: 0,
        }
    }
}

impl Default for StoredRecord {
    fn default() -> Self {
        Self::new()
    }
}
