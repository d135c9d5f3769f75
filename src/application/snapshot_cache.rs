use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::table_parser::TableParser;
use crate::domain::ports::table_source::TableSource;
use chrono::Duration;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Memoizes fetch+parse of the settlement table for `ttl`.
///
/// Holds at most one snapshot. A refresh runs under the write lock, so
/// concurrent callers that miss together trigger a single fetch and then
/// read its outcome: the stored snapshot, or the error it failed with.
/// The snapshot carries its own timestamp, so value and age are always
/// replaced together.
pub struct SnapshotCache {
    source: Arc<dyn TableSource>,
    parser: Arc<dyn TableParser>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    /// Completed refresh attempts; only changes under the write lock.
    attempts: AtomicU64,
    slot: RwLock<Slot>,
}

#[derive(Default)]
struct Slot {
    snapshot: Option<Arc<Snapshot>>,
    /// Error of the latest attempt, cleared by the next success.
    last_failure: Option<DomainError>,
}

impl SnapshotCache {
    pub fn new(
        source: Arc<dyn TableSource>,
        parser: Arc<dyn TableParser>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            source,
            parser,
            clock,
            ttl,
            attempts: AtomicU64::new(0),
            slot: RwLock::new(Slot::default()),
        }
    }

    /// Current snapshot, fetching a new one if none is cached or it expired.
    ///
    /// Errors propagate untouched; an expired snapshot is dropped before the
    /// refetch, so it is never served after its TTL. Callers that were
    /// already waiting when a refresh failed get that failure instead of
    /// starting another fetch; later calls try again.
    pub async fn get_snapshot(&self) -> Result<Arc<Snapshot>, DomainError> {
        let seen = self.attempts.load(Ordering::SeqCst);

        if let Some(snapshot) = self.fresh(&self.slot.read().await.snapshot) {
            return Ok(snapshot);
        }

        let mut slot = self.slot.write().await;
        // another caller may have refreshed while we waited for the lock
        if let Some(snapshot) = self.fresh(&slot.snapshot) {
            debug!("settlement snapshot refreshed by a concurrent caller");
            return Ok(snapshot);
        }
        if self.attempts.load(Ordering::SeqCst) != seen {
            if let Some(err) = &slot.last_failure {
                debug!(error = %err, "sharing failure of a concurrent refresh");
                return Err(err.clone());
            }
        }
        if let Some(expired) = slot.snapshot.take() {
            debug!(fetched_at = %expired.fetched_at, "settlement snapshot expired");
        }

        let outcome = self.load().await.map(Arc::new);
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &outcome {
            Ok(snapshot) => {
                slot.snapshot = Some(Arc::clone(snapshot));
                slot.last_failure = None;
            }
            Err(e) => slot.last_failure = Some(e.clone()),
        }
        outcome
    }

    /// Cached snapshot if still fresh, without any I/O.
    pub async fn peek(&self) -> Option<Arc<Snapshot>> {
        self.fresh(&self.slot.read().await.snapshot)
    }

    /// Drop the cached snapshot; the next access fetches again.
    pub async fn invalidate(&self) {
        if self.slot.write().await.snapshot.take().is_some() {
            info!("settlement snapshot invalidated");
        }
    }

    fn fresh(&self, slot: &Option<Arc<Snapshot>>) -> Option<Arc<Snapshot>> {
        let now = self.clock.now();
        slot.as_ref()
            .filter(|snapshot| snapshot.is_fresh(now, self.ttl))
            .cloned()
    }

    async fn load(&self) -> Result<Snapshot, DomainError> {
        let fetched_at = self.clock.now();

        let raw = self.source.fetch_raw_table().await.map_err(|e| {
            warn!(source = self.source.name(), error = %e, "settlement fetch failed");
            e
        })?;

        let commodities = self.parser.parse(&raw).map_err(|e| {
            warn!(source = self.source.name(), error = %e, "settlement table could not be parsed");
            e
        })?;

        info!(
            source = self.source.name(),
            records = commodities.len(),
            "settlement snapshot refreshed"
        );
        Ok(Snapshot::new(commodities, fetched_at))
    }
}
