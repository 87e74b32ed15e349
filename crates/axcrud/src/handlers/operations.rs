//! CRUD operations.
//!
//! Each operation is a single store round trip (or a full scan drain) that
//! produces a 200 envelope on success. Failures are returned to the
//! dispatcher, which maps them to status codes.

use serde_json::Value;

use axcrud_core::record::Record;
use axcrud_core::response::{OperationResult, RecordList, ResponseEnvelope};
use axcrud_core::storage::{collect_all, Result, StoreError};

use crate::state::AppState;

/// Fetch one record by ID.
pub async fn fetch_one(state: &AppState, id: &str) -> Result<ResponseEnvelope> {
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| StoreError::not_found(id))?;

    tracing::debug!(record_id = %id, "Fetched record");
    Ok(ResponseEnvelope::ok(&record))
}

/// Fetch every record in the table, draining all scan pages.
pub async fn fetch_all(state: &AppState) -> Result<ResponseEnvelope> {
    let users = collect_all(state.store.as_ref(), &state.scan_limits).await?;

    tracing::debug!(count = users.len(), "Listed records");
    Ok(ResponseEnvelope::ok(&RecordList { users }))
}

/// Create or fully replace a record.
pub async fn save(state: &AppState, record: Record) -> Result<ResponseEnvelope> {
    state.store.put(&record).await?;

    tracing::info!(record_id = %record.id(), "Saved record");
    Ok(ResponseEnvelope::ok(&OperationResult::saved(record)))
}

/// Set a single attribute on an existing record.
pub async fn update(
    state: &AppState,
    id: &str,
    attribute: &str,
    value: Value,
) -> Result<ResponseEnvelope> {
    let updated = state.store.update(id, attribute, &value).await?;

    tracing::info!(record_id = %id, attribute = %attribute, "Updated record");
    Ok(ResponseEnvelope::ok(&OperationResult::updated(updated)))
}

/// Delete a record, returning it as it was before deletion.
pub async fn delete(state: &AppState, id: &str) -> Result<ResponseEnvelope> {
    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| StoreError::not_found(id))?;

    tracing::info!(record_id = %id, "Deleted record");
    Ok(ResponseEnvelope::ok(&OperationResult::deleted(deleted)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryStore;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn body(envelope: &ResponseEnvelope) -> Value {
        serde_json::from_str(&envelope.body).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_fetch_one_round_trips() {
        let state = AppState::default();
        let alice = record(json!({"id": "u1", "name": "Alice", "tags": ["a"]}));

        save(&state, alice.clone()).await.unwrap();
        let response = fetch_one(&state, "u1").await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response), Value::from(alice));
    }

    #[tokio::test]
    async fn test_fetch_one_absent_is_not_found() {
        let state = AppState::default();

        let result = fetch_one(&state, "missing").await;

        assert_eq!(result, Err(StoreError::not_found("missing")));
    }

    #[tokio::test]
    async fn test_fetch_all_spans_pages() {
        let store = InMemoryStore::with_page_size(2);
        let state = AppState::new(Arc::new(store), &Config::default());
        for i in 0..7 {
            save(&state, record(json!({"id": format!("u{i}")})))
                .await
                .unwrap();
        }

        let response = fetch_all(&state).await.unwrap();
        let users = body(&response)["users"].as_array().unwrap().clone();

        let ids: Vec<&str> = users.iter().map(|u| u["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["u0", "u1", "u2", "u3", "u4", "u5", "u6"]);
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let state = AppState::default();

        let response = fetch_all(&state).await.unwrap();

        assert_eq!(response.body, r#"{"users":[]}"#);
    }

    #[tokio::test]
    async fn test_update_changes_only_target_attribute() {
        let state = AppState::default();
        save(&state, record(json!({"id": "u1", "name": "Alice", "age": 30})))
            .await
            .unwrap();

        let response = update(&state, "u1", "status", json!("active")).await.unwrap();
        assert_eq!(
            body(&response),
            json!({
                "Operation": "UPDATE",
                "Message": "SUCCESS",
                "UpdatedAttributes": {"status": "active"},
            })
        );

        let fetched = body(&fetch_one(&state, "u1").await.unwrap());
        assert_eq!(
            fetched,
            json!({"id": "u1", "name": "Alice", "age": 30, "status": "active"})
        );
    }

    #[tokio::test]
    async fn test_update_absent_is_not_found() {
        let state = AppState::default();

        let result = update(&state, "missing", "status", json!("active")).await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_returns_prior_record() {
        let state = AppState::default();
        let alice = record(json!({"id": "u1", "name": "Alice"}));
        save(&state, alice.clone()).await.unwrap();

        let response = delete(&state, "u1").await.unwrap();
        assert_eq!(body(&response)["Item"], Value::from(alice));
        assert_eq!(body(&response)["Operation"], "DELETE");

        let result = fetch_one(&state, "u1").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_absent_is_not_found() {
        let state = AppState::default();

        let result = delete(&state, "missing").await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
