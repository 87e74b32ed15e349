use std::{env, time::Duration};

use axcrud_core::routing::RoutePaths;
use axcrud_core::storage::ScanLimits;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the records (no default)
    pub table_name: Option<String>,
    /// AWS region (default: "us-west-1")
    pub region: String,
    /// DynamoDB endpoint override, e.g. for DynamoDB Local
    pub dynamodb_endpoint: Option<String>,
    /// Items evaluated per DynamoDB scan page (default: service maximum)
    pub scan_page_size: Option<i32>,
    /// Path addressing a single record (default: "/user")
    pub user_path: String,
    /// Path addressing the collection (default: "/users")
    pub users_path: String,
    /// Maximum scan pages per listing (default: 1,000)
    pub scan_max_pages: usize,
    /// Maximum records per listing (default: 100,000)
    pub scan_max_items: usize,
    /// Scan deadline in seconds, 0 disables it (default: 25)
    pub scan_timeout_seconds: u64,
    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (required for the DynamoDB store)
    /// - `AWS_REGION` - AWS region (default: "us-west-1")
    /// - `DYNAMODB_ENDPOINT` - Endpoint override (default: unset)
    /// - `SCAN_PAGE_SIZE` - Items per scan page (default: unset)
    /// - `USER_PATH` - Single record path (default: "/user")
    /// - `USERS_PATH` - Collection path (default: "/users")
    /// - `SCAN_MAX_PAGES` - Page ceiling per listing (default: 1,000)
    /// - `SCAN_MAX_ITEMS` - Record ceiling per listing (default: 100,000)
    /// - `SCAN_TIMEOUT_SECS` - Listing deadline in seconds (default: 25)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").ok().filter(|v| !v.is_empty()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-west-1".to_string()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok().filter(|v| !v.is_empty()),
            scan_page_size: env::var("SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i32| *v > 0),
            user_path: env::var("USER_PATH")
                .unwrap_or_else(|_| RoutePaths::DEFAULT_SINGLE.to_string()),
            users_path: env::var("USERS_PATH")
                .unwrap_or_else(|_| RoutePaths::DEFAULT_COLLECTION.to_string()),
            scan_max_pages: env::var("SCAN_MAX_PAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ScanLimits::DEFAULT_MAX_PAGES),
            scan_max_items: env::var("SCAN_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ScanLimits::DEFAULT_MAX_ITEMS),
            scan_timeout_seconds: env::var("SCAN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ScanLimits::DEFAULT_DEADLINE.as_secs()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Routes served by the router.
    pub fn route_paths(&self) -> RoutePaths {
        RoutePaths::new(self.user_path.clone(), self.users_path.clone())
    }

    /// Bounds applied to every full listing.
    pub fn scan_limits(&self) -> ScanLimits {
        let limits = ScanLimits::unbounded()
            .with_max_pages(self.scan_max_pages)
            .with_max_items(self.scan_max_items);

        match self.scan_timeout_seconds {
            0 => limits,
            secs => limits.with_deadline(Duration::from_secs(secs)),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: None,
            region: "us-west-1".to_string(),
            dynamodb_endpoint: None,
            scan_page_size: None,
            user_path: RoutePaths::DEFAULT_SINGLE.to_string(),
            users_path: RoutePaths::DEFAULT_COLLECTION.to_string(),
            scan_max_pages: ScanLimits::DEFAULT_MAX_PAGES,
            scan_max_items: ScanLimits::DEFAULT_MAX_ITEMS,
            scan_timeout_seconds: ScanLimits::DEFAULT_DEADLINE.as_secs(),
            request_timeout_seconds: 30,
        }
    }
}
