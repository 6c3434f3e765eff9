//! User and role endpoints under `/api/users`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateRoleRequest, CreateUserRequest, RoleResponse, UpdateUserRequest, UserResponse,
};

impl RestClient {
    /// `GET /api/users`
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ClientError> {
        self.get_json::<Vec<UserResponse>, ()>("/api/users", None).await
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, ClientError> {
        self.get_json::<UserResponse, ()>(&format!("/api/users/{}", id), None)
            .await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ClientError> {
        self.post_json("/api/users", req).await
    }

    /// `PATCH /api/users/{id}` - partial update semantics.
    pub async fn update_user(
        &self,
        id: &str,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ClientError> {
        self.patch_json(&format!("/api/users/{}", id), req).await
    }

    /// `GET /api/users/roles`
    pub async fn list_roles(&self) -> Result<Vec<RoleResponse>, ClientError> {
        self.get_json::<Vec<RoleResponse>, ()>("/api/users/roles", None).await
    }

    /// `POST /api/users/roles`
    pub async fn create_role(&self, req: &CreateRoleRequest) -> Result<RoleResponse, ClientError> {
        self.post_json("/api/users/roles", req).await
    }
}
