use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::record::Record;

use super::{Cursor, Result, ScanPage};

/// Capability set over an external key-value store.
///
/// Implementations perform no retries; every failure is returned as a
/// [`StoreError`](super::StoreError).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets a record by its ID.
    async fn get(&self, id: &str) -> Result<Option<Record>>;

    /// Stores a record, replacing any existing record with the same ID.
    async fn put(&self, record: &Record) -> Result<()>;

    /// Sets a single attribute on an existing record.
    ///
    /// Returns the updated attributes. Fails with `NotFound` if no record
    /// with this ID exists.
    async fn update(&self, id: &str, attribute: &str, value: &Value) -> Result<Map<String, Value>>;

    /// Deletes a record, returning the record as it was before deletion.
    async fn delete(&self, id: &str) -> Result<Option<Record>>;

    /// Reads one page of records, starting after `cursor` when given.
    async fn scan(&self, cursor: Option<&Cursor>) -> Result<ScanPage>;
}
