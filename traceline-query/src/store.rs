//! The process-wide query store.
//!
//! # Single-writer discipline
//!
//! All cache state lives behind one mutex inside [`QueryStore`]. Fetch tasks,
//! subscriptions, and invalidations funnel through the store's methods; a
//! completed fetch applies its result only while holding the lock, and only
//! after checking it has not been superseded. Subscribers receive immutable
//! [`QuerySnapshot`] values over a watch channel and cannot write back.
//!
//! # Fetch sequencing
//!
//! Every issued fetch carries a per-entry sequence number. The entry records
//! the newest issued sequence; a completing fetch whose sequence is older is
//! discarded (last-request-wins). Dropping the final subscription does not
//! cancel an in-flight fetch - the result still lands in the entry unless a
//! newer fetch superseded it.

use crate::entry::{QuerySnapshot, QueryStatus};
use crate::key::{InvalidationKey, QueryKey};
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use traceline_client::ClientError;

/// Fetch function registered per key. Must be re-invokable: invalidation
/// refetches call it again.
pub type Fetcher =
    Arc<dyn Fn() -> BoxFuture<'static, Result<serde_json::Value, ClientError>> + Send + Sync>;

/// Wrap an async closure as a [`Fetcher`].
pub fn fetcher<F, Fut>(f: F) -> Fetcher
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<serde_json::Value, ClientError>> + Send + 'static,
{
    Arc::new(move || -> BoxFuture<'static, Result<serde_json::Value, ClientError>> {
        Box::pin(f())
    })
}

struct CacheEntry {
    key: QueryKey,
    snapshot: QuerySnapshot,
    tx: watch::Sender<QuerySnapshot>,
    fetcher: Fetcher,
    subscribers: usize,
    /// Sequence of the newest issued fetch for this key.
    latest_seq: u64,
    /// Whether the fetch for `latest_seq` is still running.
    fetching: bool,
}

impl CacheEntry {
    fn publish(&self) {
        self.tx.send_replace(self.snapshot.clone());
    }
}

/// Process-wide cache of query results, keyed by canonical [`QueryKey`].
///
/// Entries are created on first subscription and live for the life of the
/// process; invalidation marks them stale instead of evicting them.
pub struct QueryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl QueryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(HashMap::new()),
        })
    }

    /// Subscribe to a key, registering (or replacing) its fetcher.
    ///
    /// Issues a fetch when the entry is missing, stale, or errored - unless
    /// one is already in flight for the current sequence, in which case the
    /// new subscription just waits on it. A fresh `Success` entry issues no
    /// fetch at all.
    pub fn subscribe(self: &Arc<Self>, key: QueryKey, fetcher: Fetcher) -> QueryHandle {
        let canonical = key.canonical();
        let mut to_spawn = None;

        let rx = {
            let mut entries = self.lock_entries();
            let entry = entries.entry(canonical.clone()).or_insert_with(|| {
                let snapshot = QuerySnapshot::idle();
                let (tx, _) = watch::channel(snapshot.clone());
                CacheEntry {
                    key: key.clone(),
                    snapshot,
                    tx,
                    fetcher: Arc::clone(&fetcher),
                    subscribers: 0,
                    latest_seq: 0,
                    fetching: false,
                }
            });

            entry.subscribers += 1;
            entry.fetcher = fetcher;

            let needs_fetch = match entry.snapshot.status {
                QueryStatus::Success => entry.snapshot.is_stale,
                QueryStatus::Idle | QueryStatus::Error => true,
                QueryStatus::Loading => true,
            };
            if needs_fetch && !entry.fetching {
                entry.latest_seq += 1;
                entry.fetching = true;
                if entry.snapshot.data.is_none() {
                    entry.snapshot.status = QueryStatus::Loading;
                }
                entry.publish();
                to_spawn = Some((entry.latest_seq, Arc::clone(&entry.fetcher)));
            }

            entry.tx.subscribe()
        };

        if let Some((seq, fetcher)) = to_spawn {
            self.spawn_fetch(canonical, seq, fetcher);
        }

        QueryHandle {
            store: Arc::clone(self),
            key,
            rx,
        }
    }

    /// Mark every matching entry stale. Entries with live subscribers
    /// refetch immediately; the rest refetch on next subscription.
    pub fn invalidate(self: &Arc<Self>, keys: &[InvalidationKey]) {
        let mut to_spawn = Vec::new();
        {
            let mut entries = self.lock_entries();
            for (canonical, entry) in entries.iter_mut() {
                if !keys.iter().any(|k| k.matches(&entry.key)) {
                    continue;
                }
                entry.snapshot.is_stale = true;
                if entry.subscribers > 0 {
                    entry.latest_seq += 1;
                    entry.fetching = true;
                    if entry.snapshot.data.is_none() {
                        entry.snapshot.status = QueryStatus::Loading;
                    }
                    to_spawn.push((canonical.clone(), entry.latest_seq, Arc::clone(&entry.fetcher)));
                }
                entry.publish();
            }
        }
        for (canonical, seq, fetcher) in to_spawn {
            tracing::debug!(key = %canonical, "invalidated, refetching");
            self.spawn_fetch(canonical, seq, fetcher);
        }
    }

    /// Current snapshot for a key, if an entry exists.
    pub fn snapshot(&self, key: &QueryKey) -> Option<QuerySnapshot> {
        let entries = self.lock_entries();
        entries.get(&key.canonical()).map(|e| e.snapshot.clone())
    }

    fn spawn_fetch(self: &Arc<Self>, canonical: String, seq: u64, fetcher: Fetcher) {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut result = fetcher().await;
            if result.is_err() {
                // One automatic retry for reads; mutations never come
                // through this path.
                tracing::debug!(key = %canonical, "fetch failed, retrying once");
                result = fetcher().await;
            }
            store.complete_fetch(&canonical, seq, result);
        });
    }

    fn complete_fetch(
        &self,
        canonical: &str,
        seq: u64,
        result: Result<serde_json::Value, ClientError>,
    ) {
        let mut entries = self.lock_entries();
        let Some(entry) = entries.get_mut(canonical) else {
            return;
        };
        if seq != entry.latest_seq {
            tracing::debug!(key = %canonical, seq, "discarding superseded fetch result");
            return;
        }
        entry.fetching = false;
        match result {
            Ok(value) => {
                entry.snapshot.status = QueryStatus::Success;
                entry.snapshot.data = Some(Arc::new(value));
                entry.snapshot.error = None;
                entry.snapshot.is_stale = false;
            }
            Err(err) => {
                tracing::warn!(key = %canonical, error = %err, "fetch failed");
                entry.snapshot.status = QueryStatus::Error;
                entry.snapshot.error = Some(Arc::new(err));
            }
        }
        entry.publish();
    }

    fn unsubscribe(&self, key: &QueryKey) {
        let mut entries = self.lock_entries();
        if let Some(entry) = entries.get_mut(&key.canonical()) {
            entry.subscribers = entry.subscribers.saturating_sub(1);
        }
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A view's subscription to one key.
///
/// Dropping the handle detaches the subscription; the cache entry and any
/// in-flight fetch survive.
pub struct QueryHandle {
    store: Arc<QueryStore>,
    key: QueryKey,
    rx: watch::Receiver<QuerySnapshot>,
}

impl QueryHandle {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Current snapshot, without consuming the change notification.
    pub fn snapshot(&self) -> QuerySnapshot {
        self.rx.borrow().clone()
    }

    /// Whether a new snapshot arrived since the last `mark_seen`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Take the current snapshot and clear the change notification.
    pub fn mark_seen(&mut self) -> QuerySnapshot {
        self.rx.borrow_and_update().clone()
    }

    /// Wait until the snapshot changes, then return it.
    pub async fn changed(&mut self) -> QuerySnapshot {
        // The sender lives in the store entry for the process lifetime, so
        // this only fails if the store itself was dropped.
        let _ = self.rx.changed().await;
        self.rx.borrow_and_update().clone()
    }
}

impl Drop for QueryHandle {
    fn drop(&mut self) {
        self.store.unsubscribe(&self.key);
    }
}
