//! User and role types.

use super::ApiDateTime;
use serde::{Deserialize, Serialize};

/// Request to register a new user (`POST /api/auth/register` or
/// `POST /api/users`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    /// Minimum 8 characters, enforced server-side.
    pub password: String,
    pub role_id: String,
}

/// Partial update for a user (`PATCH /api/users/{id}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role_id: Option<String>,
    pub is_active: Option<bool>,
}

/// User record, optionally carrying its resolved role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role_id: String,
    pub is_active: bool,
    pub created_at: ApiDateTime,
    pub role: Option<RoleResponse>,
}

/// Request to create a role (`POST /api/users/roles`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Option<serde_json::Value>,
}

/// Role record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Option<serde_json::Value>,
    pub created_at: ApiDateTime,
}
