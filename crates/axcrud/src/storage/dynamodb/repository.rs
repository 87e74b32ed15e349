//! DynamoDB store implementation.
//!
//! Implements `RecordStore` from `axcrud_core::storage` on a table whose
//! partition key is the string attribute `id`.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Map, Value};

use axcrud_core::record::{Record, ID_ATTRIBUTE};
use axcrud_core::storage::{Cursor, RecordStore, Result, ScanPage};

use super::conversions::{
    cursor_from_key, id_key, item_to_attributes, item_to_record, json_to_attribute,
    key_from_cursor, record_to_item,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// Settings for connecting to DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoDbSettings {
    pub table_name: String,
    pub region: String,
    /// Overrides the service endpoint, e.g. for DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// Maximum items DynamoDB evaluates per scan page.
    pub page_size: Option<i32>,
}

/// DynamoDB-based store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    page_size: Option<i32>,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: None,
        }
    }

    /// Limits how many items each scan page evaluates.
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Creates a store using the AWS SDK default credential chain.
    pub async fn connect(settings: DynamoDbSettings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        tracing::info!(
            table = %settings.table_name,
            region = %settings.region,
            endpoint = settings.endpoint_url.as_deref().unwrap_or("default"),
            "Connected DynamoDB client"
        );

        Self::new(Client::new(&config), settings.table_name).with_page_size(settings.page_size)
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get(&self, id: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, id_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn put(&self, record: &Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, id: &str, attribute: &str, value: &Value) -> Result<Map<String, Value>> {
        // The attribute name only ever reaches DynamoDB as a placeholder value.
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, id_key(id))
            .update_expression("SET #attr = :value")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#attr", attribute)
            .expression_attribute_names("#id", ID_ATTRIBUTE)
            .expression_attribute_values(":value", json_to_attribute(value))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        match result.attributes {
            Some(attributes) => item_to_attributes(&attributes),
            None => Ok(Map::new()),
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, id_key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        match result.attributes {
            Some(attributes) if !attributes.is_empty() => item_to_record(&attributes).map(Some),
            _ => Ok(None),
        }
    }

    async fn scan(&self, cursor: Option<&Cursor>) -> Result<ScanPage> {
        let start_key = cursor.map(key_from_cursor).transpose()?;

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_limit(self.page_size)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_record)
            .collect::<Result<Vec<_>>>()?;
        let next = cursor_from_key(result.last_evaluated_key.as_ref())?;

        Ok(ScanPage { items, next })
    }
}
