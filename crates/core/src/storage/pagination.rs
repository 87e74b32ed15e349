//! Draining a paginated scan into a single listing.
//!
//! The loop is iterative so that long cursor chains never grow the stack,
//! and is bounded by [`ScanLimits`] so a huge table cannot exhaust memory or
//! hold a request open forever.

use super::{Cursor, RecordStore, Result, ScanCeiling, ScanLimits, StoreError};
use crate::record::Record;

/// Reads every page of a fresh scan and returns all records in page order.
///
/// A store error on any page, an exceeded ceiling, or an exceeded deadline
/// fails the whole listing. Partial results are never returned.
pub async fn collect_all(store: &dyn RecordStore, limits: &ScanLimits) -> Result<Vec<Record>> {
    match limits.deadline {
        Some(deadline) => tokio::time::timeout(deadline, drain(store, limits))
            .await
            .map_err(|_| StoreError::DeadlineExceeded(deadline))?,
        None => drain(store, limits).await,
    }
}

async fn drain(store: &dyn RecordStore, limits: &ScanLimits) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut cursor: Option<Cursor> = None;
    let mut pages = 0usize;

    loop {
        let page = store.scan(cursor.as_ref()).await?;
        let has_more = !page.is_last();
        pages += 1;
        records.extend(page.items);

        check_limits(pages, records.len(), has_more, limits)?;

        tracing::trace!(pages, items = records.len(), "Scanned page");

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::debug!(pages, items = records.len(), "Scan complete");
    Ok(records)
}

/// Checks the running totals against the configured ceilings.
///
/// Reading exactly `max_pages` pages is allowed; needing one more is not.
pub fn check_limits(
    pages: usize,
    items: usize,
    has_more: bool,
    limits: &ScanLimits,
) -> Result<()> {
    if items > limits.max_items {
        return Err(StoreError::ScanLimitExceeded {
            ceiling: ScanCeiling::Items,
            limit: limits.max_items,
        });
    }
    if has_more && pages >= limits.max_pages {
        return Err(StoreError::ScanLimitExceeded {
            ceiling: ScanCeiling::Pages,
            limit: limits.max_pages,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::{json, Map, Value};

    use super::*;
    use crate::storage::ScanPage;

    /// Serves a fixed sequence of pages; the cursor is the index of the next page.
    struct PagedStore {
        pages: Vec<Vec<Record>>,
        fail_at: Option<usize>,
        delay: Option<Duration>,
        scans: AtomicUsize,
    }

    impl PagedStore {
        fn new(pages: Vec<Vec<Record>>) -> Self {
            Self {
                pages,
                fail_at: None,
                delay: None,
                scans: AtomicUsize::new(0),
            }
        }
    }

    fn record(id: &str) -> Record {
        Record::try_from(json!({"id": id})).unwrap()
    }

    fn pages_of(ids: &[&[&str]]) -> Vec<Vec<Record>> {
        ids.iter()
            .map(|page| page.iter().map(|id| record(id)).collect())
            .collect()
    }

    #[async_trait]
    impl RecordStore for PagedStore {
        async fn get(&self, _id: &str) -> Result<Option<Record>> {
            unimplemented!()
        }

        async fn put(&self, _record: &Record) -> Result<()> {
            unimplemented!()
        }

        async fn update(&self, _id: &str, _attr: &str, _value: &Value) -> Result<Map<String, Value>> {
            unimplemented!()
        }

        async fn delete(&self, _id: &str) -> Result<Option<Record>> {
            unimplemented!()
        }

        async fn scan(&self, cursor: Option<&Cursor>) -> Result<ScanPage> {
            self.scans.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let index = cursor
                .and_then(|c| c.as_value().as_u64())
                .map(|i| i as usize)
                .unwrap_or(0);

            if self.fail_at == Some(index) {
                return Err(StoreError::Unavailable("connection reset".to_string()));
            }

            let items = self.pages.get(index).cloned().unwrap_or_default();
            if index + 1 < self.pages.len() {
                Ok(ScanPage::with_next(items, Cursor::new(json!(index + 1))))
            } else {
                Ok(ScanPage::last(items))
            }
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::id).collect()
    }

    #[tokio::test]
    async fn test_collect_single_page() {
        let store = PagedStore::new(pages_of(&[&["a", "b"]]));

        let records = collect_all(&store, &ScanLimits::unbounded()).await.unwrap();

        assert_eq!(ids(&records), vec!["a", "b"]);
        assert_eq!(store.scans.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_collect_empty_table() {
        let store = PagedStore::new(Vec::new());

        let records = collect_all(&store, &ScanLimits::default()).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_collect_follows_cursor_chain_in_order() {
        let store = PagedStore::new(pages_of(&[&["a", "b"], &[], &["c"], &["d", "e"]]));

        let records = collect_all(&store, &ScanLimits::default()).await.unwrap();

        assert_eq!(ids(&records), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(store.scans.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_collect_long_chain() {
        let pages: Vec<Vec<Record>> = (0..5_000).map(|i| vec![record(&i.to_string())]).collect();
        let store = PagedStore::new(pages);

        let records = collect_all(&store, &ScanLimits::unbounded()).await.unwrap();

        assert_eq!(records.len(), 5_000);
        assert_eq!(records[4_999].id(), "4999");
    }

    #[tokio::test]
    async fn test_store_error_mid_scan_aborts_listing() {
        let mut store = PagedStore::new(pages_of(&[&["a"], &["b"], &["c"]]));
        store.fail_at = Some(1);

        let result = collect_all(&store, &ScanLimits::default()).await;

        assert_eq!(
            result,
            Err(StoreError::Unavailable("connection reset".to_string()))
        );
    }

    #[tokio::test]
    async fn test_page_ceiling_fails_listing() {
        let store = PagedStore::new(pages_of(&[&["a"], &["b"], &["c"]]));

        let result = collect_all(&store, &ScanLimits::unbounded().with_max_pages(2)).await;

        assert_eq!(
            result,
            Err(StoreError::ScanLimitExceeded {
                ceiling: ScanCeiling::Pages,
                limit: 2,
            })
        );
        assert_eq!(store.scans.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_page_ceiling_allows_exact_fit() {
        let store = PagedStore::new(pages_of(&[&["a"], &["b"]]));

        let records = collect_all(&store, &ScanLimits::unbounded().with_max_pages(2))
            .await
            .unwrap();

        assert_eq!(ids(&records), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_item_ceiling_fails_listing() {
        let store = PagedStore::new(pages_of(&[&["a", "b"], &["c", "d"]]));

        let result = collect_all(&store, &ScanLimits::unbounded().with_max_items(3)).await;

        assert_eq!(
            result,
            Err(StoreError::ScanLimitExceeded {
                ceiling: ScanCeiling::Items,
                limit: 3,
            })
        );
    }

    #[tokio::test]
    async fn test_deadline_fails_listing() {
        let mut store = PagedStore::new(pages_of(&[&["a"], &["b"], &["c"]]));
        store.delay = Some(Duration::from_millis(50));
        let deadline = Duration::from_millis(10);

        let result = collect_all(&store, &ScanLimits::unbounded().with_deadline(deadline)).await;

        assert_eq!(result, Err(StoreError::DeadlineExceeded(deadline)));
    }

    #[test]
    fn test_check_limits() {
        let limits = ScanLimits::unbounded().with_max_pages(2).with_max_items(10);

        assert!(check_limits(1, 10, true, &limits).is_ok());
        assert!(check_limits(2, 10, false, &limits).is_ok());
        assert!(check_limits(2, 10, true, &limits).is_err());
        assert!(check_limits(1, 11, false, &limits).is_err());
    }
}
