//! Authentication types.

use serde::{Deserialize, Serialize};

/// Bearer token issued by `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Body for `POST /api/auth/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    /// Minimum 8 characters, enforced server-side.
    pub new_password: String,
}
