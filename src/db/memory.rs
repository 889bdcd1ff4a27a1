//! In-memory document store for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, Document, DocumentStore, Projection, INTERNAL_ID};
use crate::errors::AppError;

/// Holds documents per collection; can be flipped into an unavailable mode.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
    next_seq: AtomicI64,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of raw documents held in `collection`.
    pub fn count(&self, collection: Collection) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .map_or(0, Vec::len)
    }

    /// Store a value as-is, the way an outside writer might.
    pub fn insert_raw(&self, collection: Collection, value: Value) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(value);
    }

    /// Stored values in `collection`, internal ids included.
    pub fn raw(&self, collection: Collection) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(
                "memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<(), AppError> {
        self.check_available()?;
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        document.insert(INTERNAL_ID.to_string(), Value::from(seq));
        self.insert_raw(collection, Value::Object(document));
        Ok(())
    }

    async fn find_many(
        &self,
        collection: Collection,
        projection: &Projection,
        limit: usize,
    ) -> Result<Vec<Value>, AppError> {
        self.check_available()?;
        let collections = self.collections.lock().unwrap();
        let documents = collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .take(limit)
                    .cloned()
                    .map(|mut value| {
                        if let Value::Object(document) = &mut value {
                            projection.apply(document);
                        }
                        value
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }
}
