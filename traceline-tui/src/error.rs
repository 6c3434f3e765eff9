//! Error types for the TUI.

use crate::config::ConfigError;
use traceline_client::ClientError;
use traceline_query::MutationError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Mutation(#[from] MutationError),
}
