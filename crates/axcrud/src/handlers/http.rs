//! HTTP adapter: turns an axum request into a router request.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{Method as HttpMethod, Uri},
    response::{IntoResponse, Response},
};

use axcrud_core::routing::{match_route, Method, Request, RouteError};

use super::{dispatch, AppError, EnvelopeResponse};
use crate::state::AppState;

/// Fallback handler receiving every request.
///
/// Routing happens in [`dispatch`], not in axum, so unmatched requests get
/// the same envelope as every other response. Method and path are matched
/// before the query or body is decoded, so an unrouted request is a 404 even
/// when its parameters are unreadable.
pub async fn handle_request(
    State(state): State<AppState>,
    method: HttpMethod,
    uri: Uri,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Bytes,
) -> Response {
    let parsed = Method::parse(method.as_str());
    let request = match_route(&state.paths, &parsed, uri.path())
        .and_then(|_| to_request(parsed, &uri, query, body));

    match request {
        Ok(request) => EnvelopeResponse(dispatch(&state, request).await).into_response(),
        Err(error) => {
            tracing::warn!(%method, path = %uri.path(), error = %error, "Request rejected");
            AppError::from(error).into_response()
        }
    }
}

fn to_request(
    method: Method,
    uri: &Uri,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Bytes,
) -> Result<Request, RouteError> {
    let Query(query) =
        query.map_err(|e| RouteError::bad_request(format!("invalid query string: {e}")))?;

    let body = if body.is_empty() {
        None
    } else {
        Some(
            String::from_utf8(body.to_vec())
                .map_err(|_| RouteError::bad_request("request body is not valid UTF-8"))?,
        )
    };

    Ok(Request {
        method,
        path: uri.path().to_string(),
        query,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_copies_parts() {
        let uri: Uri = "/user?id=u1".parse().unwrap();
        let mut query = HashMap::new();
        query.insert("id".to_string(), "u1".to_string());

        let request = to_request(
            Method::Get,
            &uri,
            Ok(Query(query)),
            Bytes::new(),
        )
        .unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/user");
        assert_eq!(request.query.get("id").map(String::as_str), Some("u1"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_to_request_rejects_invalid_utf8_body() {
        let uri: Uri = "/user".parse().unwrap();

        let result = to_request(
            Method::Post,
            &uri,
            Ok(Query(HashMap::new())),
            Bytes::from_static(&[0xff, 0xfe]),
        );

        assert!(matches!(result, Err(RouteError::BadRequest(_))));
    }
}
