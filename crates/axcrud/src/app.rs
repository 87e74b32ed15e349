use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{handlers::handle_request, state::AppState};

/// Create the application router.
///
/// Every request goes to the fallback handler; method and path matching is
/// done by the record router so unmatched requests still get an envelope.
/// The request timeout is enforced by the dispatcher for the same reason.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
