use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use axcrud_core::response::{route_error_response, store_error_response, ResponseEnvelope};
use axcrud_core::routing::RouteError;
use axcrud_core::storage::StoreError;

/// Any failure between receiving a request and producing its response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// The envelope a client receives for this failure.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        match self {
            AppError::Route(error) => route_error_response(error),
            AppError::Store(error) => store_error_response(error),
        }
    }
}

/// Axum response wrapper for a [`ResponseEnvelope`].
pub struct EnvelopeResponse(pub ResponseEnvelope);

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        let envelope = self.0;
        let status =
            StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, envelope.body).into_response();
        let headers = response.headers_mut();
        for (name, value) in &envelope.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }
        headers
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static(
                axcrud_core::response::CONTENT_TYPE_JSON,
            ));

        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        EnvelopeResponse(self.to_envelope()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_envelope() {
        let envelope = AppError::from(RouteError::NotFound).to_envelope();
        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.body, r#""404 Not Found""#);
    }

    #[test]
    fn test_store_error_envelope() {
        let envelope = AppError::from(StoreError::QueryFailed("boom".to_string())).to_envelope();
        assert_eq!(envelope.status_code, 500);
    }

    #[test]
    fn test_envelope_response_status_and_content_type() {
        let response = EnvelopeResponse(ResponseEnvelope::route_not_found()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
