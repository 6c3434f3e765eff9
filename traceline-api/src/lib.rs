//! Traceline API wire contract.
//!
//! Request and response types for every resource the backend exposes, plus
//! the error body shape it attaches to non-2xx responses. The backend is
//! externally owned; these types mirror its JSON surface exactly and carry no
//! behavior beyond serde.

pub mod error;
pub mod types;

pub use error::{ApiErrorBody, ErrorCategory};
