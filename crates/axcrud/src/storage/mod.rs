//! Store implementations.
//!
//! Concrete implementations of the `RecordStore` trait defined in
//! `axcrud_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always available; the server selects it with
//! `--in-memory`.
//!
//! # Examples
//!
//! Build without the AWS SDK (in-memory only):
//! ```bash
//! cargo build -p axcrud --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbSettings, DynamoDbStore};
pub use inmemory::InMemoryStore;
