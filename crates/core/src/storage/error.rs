use std::time::Duration;

use thiserror::Error;

/// Which scan ceiling stopped a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCeiling {
    Pages,
    Items,
}

impl std::fmt::Display for ScanCeiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanCeiling::Pages => write!(f, "page"),
            ScanCeiling::Items => write!(f, "item"),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {id}")]
    NotFound { id: String },
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Scan exceeded the {ceiling} limit of {limit}")]
    ScanLimitExceeded { ceiling: ScanCeiling, limit: usize },
    #[error("Operation did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found_display() {
        let error = StoreError::not_found("u1");
        assert_eq!(error.to_string(), "Record not found: u1");
    }

    #[test]
    fn test_store_error_unavailable_display() {
        let error = StoreError::Unavailable("dispatch failure".to_string());
        assert_eq!(error.to_string(), "Store unavailable: dispatch failure");
    }

    #[test]
    fn test_store_error_query_failed_display() {
        let error = StoreError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_store_error_invalid_data_display() {
        let error = StoreError::InvalidData("binary attributes are not supported".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: binary attributes are not supported"
        );
    }

    #[test]
    fn test_store_error_scan_limit_display() {
        let error = StoreError::ScanLimitExceeded {
            ceiling: ScanCeiling::Pages,
            limit: 10,
        };
        assert_eq!(error.to_string(), "Scan exceeded the page limit of 10");
    }

    #[test]
    fn test_store_error_deadline_display() {
        let error = StoreError::DeadlineExceeded(Duration::from_secs(5));
        assert_eq!(error.to_string(), "Operation did not finish within 5s");
    }
}
