use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// Opaque continuation token returned by a store when a scan is incomplete.
///
/// Only the store that produced a cursor knows how to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(Value);

impl Cursor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// One page of a scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanPage {
    pub items: Vec<Record>,
    /// Where to continue from. `None` means the listing is complete.
    pub next: Option<Cursor>,
}

impl ScanPage {
    /// A final page with no continuation.
    pub fn last(items: Vec<Record>) -> Self {
        Self { items, next: None }
    }

    pub fn with_next(items: Vec<Record>, next: Cursor) -> Self {
        Self {
            items,
            next: Some(next),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Bounds for draining a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum number of pages read before the listing fails.
    pub max_pages: usize,
    /// Maximum number of records accumulated before the listing fails.
    pub max_items: usize,
    /// Wall-clock budget for the whole drain.
    pub deadline: Option<Duration>,
}

impl ScanLimits {
    pub const DEFAULT_MAX_PAGES: usize = 1_000;
    pub const DEFAULT_MAX_ITEMS: usize = 100_000;
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(25);

    /// Limits with no effective ceiling and no deadline.
    pub fn unbounded() -> Self {
        Self {
            max_pages: usize::MAX,
            max_items: usize::MAX,
            deadline: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_pages: Self::DEFAULT_MAX_PAGES,
            max_items: Self::DEFAULT_MAX_ITEMS,
            deadline: Some(Self::DEFAULT_DEADLINE),
        }
    }
}
