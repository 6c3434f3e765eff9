//! Session boundary: owns login/logout and the persisted profile.
//!
//! The HTTP adapter never calls into this module; it only reads the
//! credential store. That keeps the dependency one-directional even though
//! both sides touch the same persisted state.

use crate::credentials::CredentialStore;
use crate::error::ClientError;
use crate::rest::RestClient;
use std::sync::Arc;
use traceline_api::types::UserResponse;

#[derive(Clone)]
pub struct Session {
    rest: RestClient,
    credentials: Arc<CredentialStore>,
}

impl Session {
    pub fn new(rest: RestClient) -> Self {
        let credentials = Arc::clone(rest.credentials());
        Self { rest, credentials }
    }

    /// Exchange username/password for a token, then fetch and persist the
    /// profile. Both must succeed for the session to count as authenticated.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserResponse, ClientError> {
        let token = self.rest.login(username, password).await?;
        self.credentials.set_token(token.access_token)?;

        let user = self.rest.current_user().await?;
        self.credentials.set_user(user.clone())?;
        tracing::info!(username = %user.username, "logged in");
        Ok(user)
    }

    /// Clear the persisted token and profile. The server-side logout call is
    /// best-effort; local state is cleared regardless of its outcome.
    pub async fn logout(&self) -> Result<(), ClientError> {
        if let Err(err) = self.rest.logout().await {
            tracing::debug!(error = %err, "server logout failed, clearing local session anyway");
        }
        self.credentials.clear()?;
        Ok(())
    }

    /// Token present AND profile loaded.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserResponse> {
        self.credentials.user()
    }
}
