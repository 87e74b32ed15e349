mod error;
mod resolve;
mod types;

pub use error::RouteError;
pub use resolve::{match_route, resolve, validate_attribute_name, MAX_ATTRIBUTE_NAME_LEN};
pub use types::{
    DeleteRequest, Method, Operation, ProxyEvent, Request, Route, RoutePaths, UpdateRequest,
};
