use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::store::{Document, DocumentStore, FieldValue, Fields, Query, StoreError, Value};

type Collection = BTreeMap<String, BTreeMap<String, Value>>;

/// In-process store with the same write semantics as Firestore.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Collection>> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of documents currently in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.lock().get(collection).map(|c| c.len()).unwrap_or(0)
    }

    fn resolve(fields: Fields) -> Result<BTreeMap<String, Value>, StoreError> {
        let now = Utc::now();
        let mut resolved = BTreeMap::new();
        for (name, value) in fields {
            match value {
                FieldValue::Value(v) => {
                    resolved.insert(name, v);
                }
                FieldValue::ServerTimestamp => {
                    resolved.insert(name, Value::Timestamp(now));
                }
                FieldValue::Delete => {
                    return Err(StoreError::InvalidWrite(format!(
                        "delete sentinel on '{}' is only allowed in updates",
                        name
                    )));
                }
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.lock();
        let Some(collection) = collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        let matches = collection
            .iter()
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .filter(|doc| query.matches(doc));

        Ok(match query.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        })
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .lock()
            .get(collection)
            .and_then(|c| c.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let resolved = Self::resolve(fields)?;
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), resolved);
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        self.set(collection, &id, fields).await?;
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut collections = self.lock();
        let doc = collections
            .get_mut(collection)
            .and_then(|c| c.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for (name, value) in fields {
            match value {
                FieldValue::Value(v) => {
                    doc.insert(name, v);
                }
                FieldValue::ServerTimestamp => {
                    doc.insert(name, Value::Timestamp(now));
                }
                FieldValue::Delete => {
                    doc.remove(&name);
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(c) = self.lock().get_mut(collection) {
            c.remove(id);
        }
        Ok(())
    }
}
