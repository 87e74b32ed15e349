//! Request types for the record API.
//!
//! Pure data types with no I/O, shared by the HTTP adapter and the
//! single-event entry point.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// HTTP method of an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
    /// Any method the router has no route for.
    Other(String),
}

impl Method {
    /// Method tokens are case-sensitive, so `post` is not `POST`.
    pub fn parse(method: &str) -> Self {
        match method {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Other(other) => other,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport-independent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: HashMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// API-Gateway-style proxy event, the single-invocation form of a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl From<ProxyEvent> for Request {
    fn from(event: ProxyEvent) -> Self {
        Self {
            method: Method::parse(&event.http_method),
            path: event.path,
            query: event.query_string_parameters.unwrap_or_default(),
            body: event.body,
        }
    }
}

/// The two paths the router serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    /// Path addressing a single record.
    pub single: String,
    /// Path addressing the whole collection.
    pub collection: String,
}

impl RoutePaths {
    pub const DEFAULT_SINGLE: &'static str = "/user";
    pub const DEFAULT_COLLECTION: &'static str = "/users";

    pub fn new(single: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            single: single.into(),
            collection: collection.into(),
        }
    }
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SINGLE, Self::DEFAULT_COLLECTION)
    }
}

/// Request body for a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub id: String,
    pub update_key: String,
    pub update_value: Value,
}

/// Request body for a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// Which operation a method and path select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    FetchOne,
    FetchAll,
    Save,
    Update,
    Delete,
}

/// A resolved operation with its validated parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    FetchOne {
        id: String,
    },
    FetchAll,
    Save {
        record: Record,
    },
    Update {
        id: String,
        attribute: String,
        value: Value,
    },
    Delete {
        id: String,
    },
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FetchOne { .. } => "fetch_one",
            Operation::FetchAll => "fetch_all",
            Operation::Save { .. } => "save",
            Operation::Update { .. } => "update",
            Operation::Delete { .. } => "delete",
        }
    }
}
