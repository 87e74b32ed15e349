//! Pure request resolution: method + path + parameters -> [`Operation`].

use serde::de::DeserializeOwned;

use crate::record::{Record, ID_ATTRIBUTE};

use super::{
    DeleteRequest, Method, Operation, Request, Route, RouteError, RoutePaths, UpdateRequest,
};

/// Longest attribute name accepted by a partial update.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 255;

/// Resolves a request to an operation. First match wins:
///
/// 1. `GET` single path -> fetch one (`id` query parameter)
/// 2. `GET` collection path -> fetch all
/// 3. `POST` single path -> save (body is the record)
/// 4. `PATCH` single path -> update (body is `{id, updateKey, updateValue}`)
/// 5. `DELETE` single path -> delete (body is `{id}`)
///
/// Anything else is [`RouteError::NotFound`]. Missing or malformed
/// parameters are [`RouteError::BadRequest`].
pub fn resolve(paths: &RoutePaths, request: &Request) -> Result<Operation, RouteError> {
    match match_route(paths, &request.method, &request.path)? {
        Route::FetchOne => {
            let id = request
                .query
                .get(ID_ATTRIBUTE)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| RouteError::bad_request("missing \"id\" query parameter"))?;
            Ok(Operation::FetchOne { id: id.clone() })
        }
        Route::FetchAll => Ok(Operation::FetchAll),
        Route::Save => {
            let record: Record = parse_body(request)?;
            Ok(Operation::Save { record })
        }
        Route::Update => {
            let body: UpdateRequest = parse_body(request)?;
            require_id(&body.id)?;
            validate_attribute_name(&body.update_key)?;
            Ok(Operation::Update {
                id: body.id,
                attribute: body.update_key,
                value: body.update_value,
            })
        }
        Route::Delete => {
            let body: DeleteRequest = parse_body(request)?;
            require_id(&body.id)?;
            Ok(Operation::Delete { id: body.id })
        }
    }
}

/// Matches method and path alone, without reading any parameter.
///
/// Unrouted requests are [`RouteError::NotFound`] whatever their query or
/// body holds.
pub fn match_route(paths: &RoutePaths, method: &Method, path: &str) -> Result<Route, RouteError> {
    let single = path == paths.single;
    let collection = path == paths.collection;

    match (method, single, collection) {
        (Method::Get, true, _) => Ok(Route::FetchOne),
        (Method::Get, _, true) => Ok(Route::FetchAll),
        (Method::Post, true, _) => Ok(Route::Save),
        (Method::Patch, true, _) => Ok(Route::Update),
        (Method::Delete, true, _) => Ok(Route::Delete),
        _ => Err(RouteError::NotFound),
    }
}

/// Checks that an attribute name may be targeted by a partial update.
///
/// The name must be non-empty, at most [`MAX_ATTRIBUTE_NAME_LEN`] bytes, and
/// must not be the immutable `id` attribute.
pub fn validate_attribute_name(name: &str) -> Result<(), RouteError> {
    if name.is_empty() {
        return Err(RouteError::bad_request("\"updateKey\" cannot be empty"));
    }
    if name.len() > MAX_ATTRIBUTE_NAME_LEN {
        return Err(RouteError::bad_request(format!(
            "\"updateKey\" too long (max {MAX_ATTRIBUTE_NAME_LEN} bytes)"
        )));
    }
    if name == ID_ATTRIBUTE {
        return Err(RouteError::bad_request("\"id\" cannot be updated"));
    }
    Ok(())
}

fn require_id(id: &str) -> Result<(), RouteError> {
    if id.is_empty() {
        return Err(RouteError::bad_request("\"id\" cannot be empty"));
    }
    Ok(())
}

fn parse_body<T: DeserializeOwned>(request: &Request) -> Result<T, RouteError> {
    let body = request
        .body
        .as_deref()
        .filter(|body| !body.trim().is_empty())
        .ok_or_else(|| RouteError::bad_request("missing request body"))?;

    serde_json::from_str(body).map_err(|e| RouteError::bad_request(format!("invalid body: {e}")))
}
