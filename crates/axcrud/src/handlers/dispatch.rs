//! Request router: resolves a request and runs the matching operation.

use axcrud_core::response::ResponseEnvelope;
use axcrud_core::routing::{resolve, Operation, Request};
use axcrud_core::storage::StoreError;

use super::{operations, AppError};
use crate::state::AppState;

/// Handles one request to completion. Every path yields an envelope.
pub async fn dispatch(state: &AppState, request: Request) -> ResponseEnvelope {
    match try_dispatch(state, &request).await {
        Ok(response) => response,
        Err(error) => {
            let response = error.to_envelope();
            match &error {
                AppError::Route(_) => tracing::warn!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status_code,
                    error = %error,
                    "Request rejected"
                ),
                AppError::Store(_) => tracing::error!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status_code,
                    error = %error,
                    "Operation failed"
                ),
            }
            response
        }
    }
}

async fn try_dispatch(state: &AppState, request: &Request) -> Result<ResponseEnvelope, AppError> {
    let operation = resolve(&state.paths, request)?;
    tracing::debug!(operation = operation.name(), "Dispatching request");

    let deadline = state.request_timeout;
    tokio::time::timeout(deadline, run(state, operation))
        .await
        .map_err(|_| StoreError::DeadlineExceeded(deadline))?
}

async fn run(state: &AppState, operation: Operation) -> Result<ResponseEnvelope, AppError> {
    let response = match operation {
        Operation::FetchOne { id } => operations::fetch_one(state, &id).await?,
        Operation::FetchAll => operations::fetch_all(state).await?,
        Operation::Save { record } => operations::save(state, record).await?,
        Operation::Update {
            id,
            attribute,
            value,
        } => operations::update(state, &id, &attribute, value).await?,
        Operation::Delete { id } => operations::delete(state, &id).await?,
    };

    Ok(response)
}
