//! Application state shared by every request.
//!
//! The store client is created once per process and injected here; handlers
//! only ever see it as a `RecordStore` trait object.

use std::sync::Arc;
use std::time::Duration;

use axcrud_core::routing::RoutePaths;
use axcrud_core::storage::{RecordStore, ScanLimits};

use crate::config::Config;
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Cheap to clone; cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Record store (DynamoDB or in-memory).
    pub store: Arc<dyn RecordStore>,
    /// Single-record and collection paths.
    pub paths: RoutePaths,
    /// Bounds for full listings.
    pub scan_limits: ScanLimits,
    /// Budget for running one operation.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates state around an existing store using the given configuration.
    pub fn new(store: Arc<dyn RecordStore>, config: &Config) -> Self {
        Self {
            store,
            paths: config.route_paths(),
            scan_limits: config.scan_limits(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates state backed by an in-memory store.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(Arc::new(InMemoryStore::new()), config)
    }

    pub fn with_scan_limits(mut self, scan_limits: ScanLimits) -> Self {
        self.scan_limits = scan_limits;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(&Config::default())
    }
}
