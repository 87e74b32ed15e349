//! In-memory store implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use axcrud_core::record::{Record, ID_ATTRIBUTE};
use axcrud_core::storage::{Cursor, RecordStore, Result, ScanPage, StoreError};

/// In-memory storage backend for tests and local development.
///
/// Records live in a `BTreeMap` keyed by ID, so scans return records in ID
/// order. Scans are split into pages of `page_size` records, with the last
/// ID of a page as the cursor. Data is lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Arc<RwLock<BTreeMap<String, Record>>>,
    page_size: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_page_size(Self::DEFAULT_PAGE_SIZE)
    }

    /// Creates a store whose scans return at most `page_size` records per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, record: &Record) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn update(&self, id: &str, attribute: &str, value: &Value) -> Result<Map<String, Value>> {
        if attribute == ID_ATTRIBUTE {
            return Err(StoreError::InvalidData(
                "the id attribute cannot be updated".to_string(),
            ));
        }

        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id))?;
        record.set(attribute, value.clone());

        let mut updated = Map::new();
        updated.insert(attribute.to_string(), value.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<Option<Record>> {
        let mut records = self.records.write().await;
        Ok(records.remove(id))
    }

    async fn scan(&self, cursor: Option<&Cursor>) -> Result<ScanPage> {
        let start = match cursor {
            None => Bound::Unbounded,
            Some(cursor) => {
                let last = cursor.as_value().as_str().ok_or_else(|| {
                    StoreError::InvalidData(format!("Invalid scan cursor: {}", cursor.as_value()))
                })?;
                Bound::Excluded(last.to_string())
            }
        };

        let records = self.records.read().await;
        let mut remaining = records.range((start, Bound::Unbounded));
        let items: Vec<Record> = remaining
            .by_ref()
            .take(self.page_size)
            .map(|(_, record)| record.clone())
            .collect();

        let next = match (remaining.next(), items.last()) {
            (Some(_), Some(last)) => Some(Cursor::new(Value::String(last.id().to_string()))),
            _ => None,
        };

        Ok(ScanPage { items, next })
    }
}
