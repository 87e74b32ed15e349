mod bodies;
mod envelope;
mod errors;

pub use bodies::{
    ErrorBody, OperationKind, OperationResult, RecordList, DELETE_MESSAGE, SAVE_MESSAGE,
    UPDATE_MESSAGE,
};
pub use envelope::{ResponseEnvelope, CONTENT_TYPE_JSON, NOT_FOUND_BODY};
pub use errors::{route_error_response, store_error_response};
