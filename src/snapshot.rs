use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::SourceError;
use crate::models::RawRow;
use crate::source::RowSource;

struct CachedRows {
    fetched_at: Instant,
    rows: Arc<Vec<RawRow>>,
}

/// Time-bounded snapshot cache over a [`RowSource`]. Requests inside the
/// refresh window share the last snapshot; the first request past it
/// refetches and replaces the slot. A failed refetch leaves the slot as it
/// was and reports the error, so no partial data is ever served.
pub struct SnapshotCache {
    source: Box<dyn RowSource>,
    ttl: Duration,
    slot: Mutex<Option<CachedRows>>,
}

impl SnapshotCache {
    pub fn new(source: Box<dyn RowSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// The current snapshot, refetched when stale.
    pub async fn rows(&self) -> Result<Arc<Vec<RawRow>>, SourceError> {
        self.rows_at(Instant::now()).await
    }

    async fn rows_at(&self, now: Instant) -> Result<Arc<Vec<RawRow>>, SourceError> {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if now.duration_since(cached.fetched_at) < self.ttl {
                return Ok(Arc::clone(&cached.rows));
            }
            debug!("sheet snapshot expired, refetching");
        }

        let rows = Arc::new(self.source.fetch_rows().await?);
        *slot = Some(CachedRows {
            fetched_at: now,
            rows: Arc::clone(&rows),
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        fetches: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl RowSource for CountingSource {
        async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::Io(std::io::Error::other("down")));
            }
            Ok(vec![RawRow {
                timestamp_text: "2024. 03. 01".to_string(),
                participant_text: "Kim".to_string(),
                attendance_text: "참석".to_string(),
                reading_count_text: "1회".to_string(),
                reading_range_text: "1장".to_string(),
                prayer_text: "1일".to_string(),
                fee_text: "100원".to_string(),
            }])
        }

        fn describe(&self) -> String {
            "counting stub".to_string()
        }
    }

    fn counting_cache(fail: bool) -> (SnapshotCache, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            fetches: Arc::clone(&fetches),
            fail,
        };
        let cache = SnapshotCache::new(Box::new(source), Duration::from_secs(600));
        (cache, fetches)
    }

    #[tokio::test]
    async fn snapshot_is_reused_inside_the_window() {
        let (cache, fetches) = counting_cache(false);

        let start = Instant::now();
        let first = cache.rows_at(start).await.expect("first fetch");
        let second = cache
            .rows_at(start + Duration::from_secs(30))
            .await
            .expect("cached fetch");

        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn snapshot_refetches_after_the_window() {
        let (cache, fetches) = counting_cache(false);

        let start = Instant::now();
        cache.rows_at(start).await.expect("first fetch");
        cache
            .rows_at(start + Duration::from_secs(601))
            .await
            .expect("refetch");

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_the_error() {
        let (cache, fetches) = counting_cache(true);
        let err = cache.rows().await.expect_err("source is down");
        assert!(matches!(err, SourceError::Io(_)));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }
}
