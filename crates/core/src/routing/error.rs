use thiserror::Error;

/// Errors produced while turning a request into an operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("404 Not Found")]
    NotFound,
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl RouteError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        RouteError::BadRequest(message.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::NotFound => 404,
            RouteError::BadRequest(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_display() {
        assert_eq!(RouteError::NotFound.to_string(), "404 Not Found");
        assert_eq!(
            RouteError::bad_request("missing body").to_string(),
            "Bad request: missing body"
        );
    }

    #[test]
    fn test_route_error_status_codes() {
        assert_eq!(RouteError::NotFound.status_code(), 404);
        assert_eq!(RouteError::bad_request("x").status_code(), 400);
    }
}
