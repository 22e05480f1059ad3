use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

use parkfit_domain::FetchError;

use crate::{Collection, DocumentStore};

/// Document store keeping all collections in memory.
#[derive(Default)]
pub struct MemoryStore {
    collections: RefCell<BTreeMap<Collection, Vec<serde_json::Value>>>,
    offline: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: Collection, document: serde_json::Value) {
        self.collections
            .borrow_mut()
            .entry(collection)
            .or_default()
            .push(document);
    }

    /// Let all reads fail as if the store was unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check_connection(&self) -> Result<(), FetchError> {
        if self.offline.get() {
            return Err(FetchError::NoConnection);
        }
        Ok(())
    }
}

impl DocumentStore for MemoryStore {
    async fn get_all(&self, collection: Collection) -> Result<Vec<serde_json::Value>, FetchError> {
        self.check_connection()?;
        Ok(self
            .collections
            .borrow()
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, FetchError> {
        self.check_connection()?;
        Ok(self.collections.borrow().get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|d| d.get("id").and_then(serde_json::Value::as_str) == Some(id))
                .cloned()
        }))
    }
}
