pub mod dispatch;
pub mod error;
pub mod http;
pub mod invoke;
pub mod operations;

pub use dispatch::dispatch;
pub use error::{AppError, EnvelopeResponse};
pub use http::handle_request;
pub use invoke::{invoke, read_event};
