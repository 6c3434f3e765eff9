//! Shared response shapes.

use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by delete and action endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Pagination window shared by most list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
