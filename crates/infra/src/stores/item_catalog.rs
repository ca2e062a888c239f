use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use stockgate_core::{ItemCode, ItemGroupId};

/// Item master record, reduced to what the rules need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_code: ItemCode,
    #[serde(default)]
    pub item_group: Option<ItemGroupId>,
}

/// In-memory item → item group mapping.
#[derive(Debug, Default)]
pub struct InMemoryItemCatalog {
    inner: RwLock<HashMap<ItemCode, Option<ItemGroupId>>>,
}

impl InMemoryItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, record: ItemRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(record.item_code, record.item_group);
        }
    }

    pub fn item_group(&self, item: &ItemCode) -> Option<ItemGroupId> {
        let map = self.inner.read().ok()?;
        map.get(item).cloned().flatten()
    }
}
