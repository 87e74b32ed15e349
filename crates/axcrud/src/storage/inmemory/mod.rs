//! In-memory storage backend.
//!
//! Stores all records in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and for running the server locally without AWS credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use axcrud::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::with_page_size(10);
//! ```

mod repository;

pub use repository::InMemoryStore;
