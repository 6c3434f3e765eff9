//! One-shot server writes with declared cache side effects.

use crate::key::InvalidationKey;
use crate::store::QueryStore;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use traceline_client::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// A run is already in flight on this instance. The UI disables the
    /// triggering control while pending; this guard backstops it.
    #[error("mutation already in flight")]
    AlreadyPending,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A mutation bound to the cache keys it invalidates on success.
///
/// At most one run may be in flight per instance. On success the declared
/// keys are marked stale (live subscribers refetch); on failure nothing is
/// invalidated and the error is returned for display. The operation is never
/// retried - a duplicate POST is a duplicate record.
pub struct Mutation {
    store: Arc<QueryStore>,
    invalidates: Vec<InvalidationKey>,
    pending: AtomicBool,
}

impl Mutation {
    pub fn new(store: Arc<QueryStore>, invalidates: Vec<InvalidationKey>) -> Self {
        Self {
            store,
            invalidates,
            pending: AtomicBool::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Run the operation. Concurrent calls while one is in flight get
    /// [`MutationError::AlreadyPending`] without touching the server.
    pub async fn run<T, F, Fut>(&self, op: F) -> Result<T, MutationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(MutationError::AlreadyPending);
        }

        let result = op().await;
        if result.is_ok() {
            self.store.invalidate(&self.invalidates);
        }
        self.pending.store(false, Ordering::SeqCst);

        result.map_err(MutationError::from)
    }
}
