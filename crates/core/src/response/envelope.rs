use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content type carried by every response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Body of an unmatched route. Serialized as a JSON string.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// The single response produced for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded body.
    pub body: String,
}

impl ResponseEnvelope {
    /// Builds a JSON response from any serializable body.
    ///
    /// A body that fails to serialize becomes a 500 response.
    pub fn json<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self::raw(status_code, body),
            Err(e) => Self::raw(
                500,
                serde_json::json!({
                    "Error": "SERIALIZATION",
                    "Message": e.to_string(),
                })
                .to_string(),
            ),
        }
    }

    /// 200 response.
    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Self {
        Self::json(200, body)
    }

    /// 404 response for a request that matched no route.
    pub fn route_not_found() -> Self {
        Self::json(404, NOT_FOUND_BODY)
    }

    fn raw(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}
