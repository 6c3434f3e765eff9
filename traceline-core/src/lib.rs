//! Traceline Core - Shared Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no business logic, no I/O.
//!
//! Record identifiers stay as plain strings on the wire (the backend issues
//! UUIDv4 strings); what this crate types is the RESOURCE taxonomy, so cache
//! keys and invalidation sets are checkable at compile time.

mod resource;

pub use resource::{ResourceKind, ResourceKindParseError};
