//! Traceline client layer.
//!
//! Three pieces, layered bottom-up:
//!
//! - [`RestClient`]: the HTTP adapter. Base URL, JSON default, bearer-token
//!   injection from the credential store, and the global 401 handler. Holds
//!   no cache and never retries.
//! - Resource modules ([`resources`]): one thin module per backend domain.
//!   Fixed paths and verbs, typed request/response decoding, nothing else.
//!   Caching policy lives entirely in `traceline-query`.
//! - [`Session`]: owns login/logout and the persisted token + profile.
//!   The adapter reads credentials through the store only, so the two never
//!   call into each other.

pub mod credentials;
pub mod error;
pub mod resources;
pub mod rest;
pub mod session;

pub use credentials::{CredentialError, CredentialStore};
pub use error::ClientError;
pub use rest::{NavigationSink, RestClient};
pub use session::Session;
