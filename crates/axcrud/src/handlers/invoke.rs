//! Single-event entry point.
//!
//! Reads one proxy event, runs it through the router, and returns the
//! envelope, the way a function runtime would invoke the handler.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use axcrud_core::response::ResponseEnvelope;
use axcrud_core::routing::ProxyEvent;

use super::dispatch;
use crate::state::AppState;

/// Handles one proxy event.
pub async fn invoke(state: &AppState, event: ProxyEvent) -> ResponseEnvelope {
    tracing::info!(method = %event.http_method, path = %event.path, "Request event");
    dispatch(state, event.into()).await
}

/// Reads a proxy event from a file, or from stdin when `source` is `-`.
pub fn read_event(source: &Path) -> Result<ProxyEvent> {
    let raw = if source == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read event from stdin")?;
        raw
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read event file {}", source.display()))?
    };

    parse_event(&raw)
}

/// Parses a proxy event from JSON.
pub fn parse_event(raw: &str) -> Result<ProxyEvent> {
    serde_json::from_str(raw).context("Invalid proxy event")
}
