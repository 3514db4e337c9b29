use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A player record.
///
/// Only the `id` is interpreted; everything else is carried as opaque
/// attributes owned by whichever repository stores the record. Attributes
/// serialize as a nested object so no key can collide with `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
