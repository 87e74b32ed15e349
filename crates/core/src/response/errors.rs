//! Pure mapping from errors to response envelopes.

use crate::routing::RouteError;
use crate::storage::{store_error_kind, store_error_to_status_code, StoreError};

use super::{ErrorBody, ResponseEnvelope};

/// Response for a request that could not be resolved to an operation.
pub fn route_error_response(error: &RouteError) -> ResponseEnvelope {
    match error {
        RouteError::NotFound => ResponseEnvelope::route_not_found(),
        RouteError::BadRequest(message) => {
            ResponseEnvelope::json(error.status_code(), &ErrorBody::new("BAD_REQUEST", message))
        }
    }
}

/// Response for a failed store operation.
pub fn store_error_response(error: &StoreError) -> ResponseEnvelope {
    ResponseEnvelope::json(
        store_error_to_status_code(error),
        &ErrorBody::new(store_error_kind(error), error.to_string()),
    )
}
