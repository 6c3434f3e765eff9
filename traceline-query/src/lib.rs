//! Query cache with explicit invalidation contracts.
//!
//! This crate is the single place caching policy lives. Views subscribe to
//! a [`QueryKey`]; the store fetches through the registered fetcher, fans the
//! result out to every subscriber of that key, and refetches when a mutation
//! declares the key invalid.
//!
//! # Design Philosophy
//!
//! Caches that guess at freshness produce subtle bugs. This store makes
//! staleness explicit: entries are only ever marked stale by a mutation's
//! declared [`InvalidationKey`] set, and a stale entry refetches immediately
//! when it has live subscribers, or on next subscription otherwise. Nothing
//! refetches because a window regained focus or a timer fired.
//!
//! # Contracts
//!
//! - One fetch per key, no matter how many subscribers mount while it is in
//!   flight (request de-duplication).
//! - Per-key last-request-wins: a fetch result that was superseded by a newer
//!   fetch for the same key is discarded, never stored.
//! - Read fetches retry exactly once on failure before surfacing the error.
//!   Mutations never retry.
//! - A failed mutation invalidates nothing; cached data for related keys is
//!   untouched.
//! - The store is the only writer of cache state. Subscribers observe
//!   snapshots through a watch channel; they never mutate entries.
//!
//! # Example
//!
//! ```ignore
//! let store = QueryStore::new();
//! let key = QueryKey::new(ResourceKind::Documents).with_param("status", "Draft");
//! let rest = client.clone();
//! let handle = store.subscribe(key, fetcher(move || {
//!     let rest = rest.clone();
//!     async move {
//!         let docs = rest.list_documents(&params).await?;
//!         Ok(serde_json::to_value(docs)?)
//!     }
//! }));
//!
//! // A delete that refreshes every documents list view, however filtered:
//! let mutation = Mutation::new(
//!     store.clone(),
//!     vec![InvalidationKey::Resource(ResourceKind::Documents)],
//! );
//! mutation.run(|| async move { rest.delete_document(&id).await }).await?;
//! ```

pub mod entry;
pub mod key;
pub mod mutation;
pub mod store;

pub use entry::{QuerySnapshot, QueryStatus};
pub use key::{InvalidationKey, QueryKey};
pub use mutation::{Mutation, MutationError};
pub use store::{fetcher, Fetcher, QueryHandle, QueryStore};
