//! Cache entry state as observed by subscribers.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use traceline_client::ClientError;

/// Fetch lifecycle of one cache entry.
///
/// `Loading` only means "fetching with nothing to show yet". A stale entry
/// being refreshed keeps `Success` and its previous payload; subscribers keep
/// rendering data while the refetch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Point-in-time view of a cache entry, delivered through the watch channel.
///
/// The payload is an opaque JSON value; the cache layer never interprets it.
/// Typed decoding happens at the edge via [`QuerySnapshot::decode`].
#[derive(Debug, Clone)]
pub struct QuerySnapshot {
    pub status: QueryStatus,
    /// Last successful payload. Retained while a refetch is in flight and
    /// across fetch errors.
    pub data: Option<Arc<serde_json::Value>>,
    /// Error from the most recent failed fetch, after its single retry.
    pub error: Option<Arc<ClientError>>,
    /// Marked by invalidation; cleared when a fresh payload lands.
    pub is_stale: bool,
}

impl QuerySnapshot {
    pub(crate) fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            is_stale: false,
        }
    }

    /// Initial load: fetching with no previous payload to show.
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    /// Decode the payload into a typed value. `Ok(None)` means no payload
    /// yet; a decode failure means the fetcher stored a shape the caller
    /// did not expect.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match &self.data {
            Some(value) => serde_json::from_value(value.as_ref().clone()).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_snapshot_is_empty() {
        let snapshot = QuerySnapshot::idle();
        assert_eq!(snapshot.status, QueryStatus::Idle);
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_stale);
    }

    #[test]
    fn decode_returns_none_without_payload() {
        let snapshot = QuerySnapshot::idle();
        let decoded: Option<Vec<String>> = snapshot.decode().unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn decode_roundtrips_payload() {
        let mut snapshot = QuerySnapshot::idle();
        snapshot.status = QueryStatus::Success;
        snapshot.data = Some(Arc::new(serde_json::json!(["a", "b"])));
        let decoded: Option<Vec<String>> = snapshot.decode().unwrap();
        assert_eq!(decoded, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn decode_surfaces_shape_mismatch() {
        let mut snapshot = QuerySnapshot::idle();
        snapshot.data = Some(Arc::new(serde_json::json!({"not": "a list"})));
        let decoded: Result<Option<Vec<String>>, _> = snapshot.decode();
        assert!(decoded.is_err());
    }
}
