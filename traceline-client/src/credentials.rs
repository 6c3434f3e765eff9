//! Persisted credentials: bearer token and current-user profile.
//!
//! Backing storage is a single JSON file with two keys, `token` and `user`.
//! Every write goes straight to disk so a crash never leaves the file and
//! the in-memory copy disagreeing. The store is the only writer; the HTTP
//! adapter and session boundary go through it rather than holding copies.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use traceline_api::types::UserResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Credentials {
    token: Option<String>,
    user: Option<UserResponse>,
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed credential store shared across the process.
pub struct CredentialStore {
    path: PathBuf,
    inner: RwLock<Credentials>,
}

impl CredentialStore {
    /// Open the store at `path`, loading existing credentials if the file
    /// exists. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        let path = path.into();
        let inner = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Credentials::default()
        };
        Ok(Self {
            path,
            inner: RwLock::new(inner),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner).token.clone()
    }

    pub fn user(&self) -> Option<UserResponse> {
        self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner).user.clone()
    }

    pub fn set_token(&self, token: String) -> Result<(), CredentialError> {
        let mut guard = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.token = Some(token);
        persist(&self.path, &guard)
    }

    pub fn set_user(&self, user: UserResponse) -> Result<(), CredentialError> {
        let mut guard = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.user = Some(user);
        persist(&self.path, &guard)
    }

    /// Clear both token and profile. Idempotent.
    pub fn clear(&self) -> Result<(), CredentialError> {
        let mut guard = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.token = None;
        guard.user = None;
        persist(&self.path, &guard)
    }

    /// Whether both a token and a loaded profile are present.
    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.token.is_some() && guard.user.is_some()
    }
}

fn persist(path: &Path, credentials: &Credentials) -> Result<(), CredentialError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(credentials)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user() -> UserResponse {
        UserResponse {
            id: "u-1".to_string(),
            email: "qa@example.com".to_string(),
            username: "qa".to_string(),
            first_name: None,
            last_name: None,
            department: Some("Quality".to_string()),
            role_id: "r-1".to_string(),
            is_active: true,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .expect("valid date")
                .and_hms_opt(8, 0, 0)
                .expect("valid time"),
            role: None,
        }
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path().join("credentials.json")).unwrap();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn token_and_user_roundtrip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.json");

        let store = CredentialStore::open(&path).unwrap();
        store.set_token("tok-123".to_string()).unwrap();
        store.set_user(sample_user()).unwrap();
        assert!(store.is_authenticated());

        let reopened = CredentialStore::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("tok-123"));
        assert_eq!(reopened.user().map(|u| u.username), Some("qa".to_string()));
    }

    #[test]
    fn clear_removes_both_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.json");

        let store = CredentialStore::open(&path).unwrap();
        store.set_token("tok".to_string()).unwrap();
        store.set_user(sample_user()).unwrap();

        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.user().is_none());

        store.clear().unwrap();
        let reopened = CredentialStore::open(&path).unwrap();
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn token_alone_is_not_authenticated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::open(dir.path().join("credentials.json")).unwrap();
        store.set_token("tok".to_string()).unwrap();
        assert!(!store.is_authenticated());
    }
}
