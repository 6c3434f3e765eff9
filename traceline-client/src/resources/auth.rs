//! Authentication endpoints under `/api/auth`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{ChangePasswordRequest, CreateUserRequest, MessageResponse, Token, UserResponse};

impl RestClient {
    /// `POST /api/auth/login` - form-urlencoded, per the OAuth2 password
    /// flow the backend implements.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ClientError> {
        self.post_form("/api/auth/login", &[("username", username), ("password", password)])
            .await
    }

    /// `POST /api/auth/register`
    pub async fn register(&self, req: &CreateUserRequest) -> Result<UserResponse, ClientError> {
        self.post_json("/api/auth/register", req).await
    }

    /// `GET /api/auth/me`
    pub async fn current_user(&self) -> Result<UserResponse, ClientError> {
        self.get_json::<UserResponse, ()>("/api/auth/me", None).await
    }

    /// `POST /api/auth/logout`
    pub async fn logout(&self) -> Result<MessageResponse, ClientError> {
        self.post_empty("/api/auth/logout").await
    }

    /// `POST /api/auth/change-password`
    pub async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.post_json("/api/auth/change-password", req).await
    }
}
