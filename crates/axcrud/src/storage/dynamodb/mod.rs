//! DynamoDB storage backend implementation.
//!
//! Implements the `RecordStore` trait using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;

pub use repository::{DynamoDbSettings, DynamoDbStore};
