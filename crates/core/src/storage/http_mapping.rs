//! Pure functions for mapping store errors to HTTP status codes.
//!
//! Follows the Functional Core pattern: no side effects, no I/O.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Unavailable` -> 502 (Bad Gateway)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
/// - `ScanLimitExceeded` -> 500 (Internal Server Error)
/// - `DeadlineExceeded` -> 504 (Gateway Timeout)
///
/// # Examples
///
/// ```
/// use axcrud_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::not_found("u1");
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::NotFound { .. } => 404,
        StoreError::Unavailable(_) => 502,
        StoreError::QueryFailed(_) => 500,
        StoreError::Serialization(_) => 500,
        StoreError::InvalidData(_) => 400,
        StoreError::ScanLimitExceeded { .. } => 500,
        StoreError::DeadlineExceeded(_) => 504,
    }
}

/// Stable, machine-readable name for an error kind, used in error bodies.
pub fn store_error_kind(error: &StoreError) -> &'static str {
    match error {
        StoreError::NotFound { .. } => "NOT_FOUND",
        StoreError::Unavailable(_) => "STORE_UNAVAILABLE",
        StoreError::QueryFailed(_) => "STORE_ERROR",
        StoreError::Serialization(_) => "STORE_ERROR",
        StoreError::InvalidData(_) => "BAD_REQUEST",
        StoreError::ScanLimitExceeded { .. } => "SCAN_LIMIT_EXCEEDED",
        StoreError::DeadlineExceeded(_) => "TIMEOUT",
    }
}
