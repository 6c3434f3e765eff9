//! REST adapter for the Traceline backend.
//!
//! # Design
//!
//! `RestClient` wraps a `reqwest::Client` with the backend base URL and a
//! request timeout. Every outgoing request reads the bearer token from the
//! credential store at send time; if no token is stored the header is simply
//! omitted. The adapter owns exactly one cross-cutting behavior: on any 401
//! response it clears the persisted credentials and signals a login redirect
//! through the [`NavigationSink`], unless the login view is already active.
//! Everything else - retries, caching, invalidation - lives above this layer.

use crate::credentials::CredentialStore;
use crate::error::ClientError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use traceline_api::{ApiErrorBody, ErrorCategory};

/// Where the adapter reports auth failures.
///
/// The terminal UI installs a sink that flips the active view to the login
/// screen; tests install counters. The check prevents a 401 raised while the
/// login view is already up (a bad password, say) from re-triggering the
/// redirect.
pub trait NavigationSink: Send + Sync {
    /// Whether the login view is currently active.
    fn is_login_active(&self) -> bool;

    /// Request a switch to the login view.
    fn redirect_to_login(&self);
}

/// HTTP adapter shared by every resource module.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<CredentialStore>,
    nav: Arc<dyn NavigationSink>,
}

impl RestClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: Arc<CredentialStore>,
        nav: Arc<dyn NavigationSink>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            nav,
        })
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer header from the credential store, when a token is present.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.credentials.token() {
            let value = format!("Bearer {}", token);
            if let Ok(value) = HeaderValue::from_str(&value) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.get(self.url(path)).headers(self.auth_headers());
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(request).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers())
            .json(body);
        self.execute(request).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .put(self.url(path))
            .headers(self.auth_headers())
            .json(body);
        self.execute(request).await
    }

    pub(crate) async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .patch(self.url(path))
            .headers(self.auth_headers())
            .json(body);
        self.execute(request).await
    }

    /// POST with an empty body, for action endpoints like approve/release.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.http.post(self.url(path)).headers(self.auth_headers());
        self.execute(request).await
    }

    /// POST with an empty body and query-string parameters, for action
    /// endpoints like the CAPA effectiveness check.
    pub(crate) async fn post_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers())
            .query(query);
        self.execute(request).await
    }

    /// PATCH with an empty body and query-string parameters, for action
    /// endpoints like work-order complete and inventory adjust.
    pub(crate) async fn patch_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .patch(self.url(path))
            .headers(self.auth_headers())
            .query(query);
        self.execute(request).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.http.delete(self.url(path)).headers(self.auth_headers());
        self.execute(request).await
    }

    /// POST a form-urlencoded body. Only the login endpoint uses this.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers())
            .form(form);
        self.execute(request).await
    }

    /// POST a multipart form, for file uploads.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers())
            .multipart(form);
        self.execute(request).await
    }

    /// GET an opaque binary body, for file downloads.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let request = self.http.get(self.url(path)).headers(self.auth_headers());
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let _ = response.bytes().await;
            self.handle_unauthorized();
            return Err(ClientError::Unauthorized);
        }
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(decode_error_body(status.as_u16(), &text))
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let _ = response.text().await;
            self.handle_unauthorized();
            return Err(ClientError::Unauthorized);
        }
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(decode_error_body(status.as_u16(), &text))
        }
    }

    /// Global 401 handling: clear persisted credentials, then signal a
    /// redirect unless the login view is already showing.
    fn handle_unauthorized(&self) {
        tracing::warn!("received 401, clearing stored credentials");
        if let Err(err) = self.credentials.clear() {
            tracing::error!(error = %err, "failed to clear credentials after 401");
        }
        if !self.nav.is_login_active() {
            self.nav.redirect_to_login();
        }
    }
}

/// Decode a non-2xx body into [`ClientError::Api`]. The backend emits
/// `{"detail": "..."}`; anything else is carried through as raw text.
fn decode_error_body(status: u16, text: &str) -> ClientError {
    let detail = match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(body) => body.detail,
        Err(_) => text.to_string(),
    };
    ClientError::Api {
        status,
        category: ErrorCategory::from_status(status),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct RecordingSink {
        login_active: AtomicBool,
        redirects: AtomicUsize,
    }

    impl RecordingSink {
        fn new(login_active: bool) -> Self {
            Self {
                login_active: AtomicBool::new(login_active),
                redirects: AtomicUsize::new(0),
            }
        }
    }

    impl NavigationSink for RecordingSink {
        fn is_login_active(&self) -> bool {
            self.login_active.load(Ordering::SeqCst)
        }

        fn redirect_to_login(&self) {
            self.redirects.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn client_with_sink(sink: Arc<RecordingSink>, dir: &std::path::Path) -> RestClient {
        let store = Arc::new(CredentialStore::open(dir.join("credentials.json")).unwrap());
        store.set_token("tok".to_string()).unwrap();
        RestClient::new(
            "http://localhost:8000",
            Duration::from_millis(500),
            store,
            sink,
        )
        .unwrap()
    }

    #[test]
    fn unauthorized_clears_credentials_and_redirects_once() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new(false));
        let client = client_with_sink(sink.clone(), dir.path());

        client.handle_unauthorized();
        assert!(client.credentials().token().is_none());
        assert_eq!(sink.redirects.load(Ordering::SeqCst), 1);

        // A second 401 clears again (idempotent) and redirects again; the
        // guard is about the login view, not about counting occurrences.
        client.handle_unauthorized();
        assert_eq!(sink.redirects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unauthorized_on_login_view_does_not_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new(true));
        let client = client_with_sink(sink.clone(), dir.path());

        client.handle_unauthorized();
        assert!(client.credentials().token().is_none());
        assert_eq!(sink.redirects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn error_body_detail_is_extracted() {
        let err = decode_error_body(404, r#"{"detail": "Document not found"}"#);
        match err {
            ClientError::Api {
                status,
                category,
                detail,
            } => {
                assert_eq!(status, 404);
                assert_eq!(category, ErrorCategory::NotFound);
                assert_eq!(detail, "Document not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_json_error_body_is_passed_through() {
        let err = decode_error_body(502, "Bad Gateway");
        match err {
            ClientError::Api { status, detail, .. } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_token_omits_authorization_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(
            CredentialStore::open(dir.path().join("credentials.json")).unwrap(),
        );
        let client = RestClient::new(
            "http://localhost:8000/",
            Duration::from_millis(500),
            store,
            Arc::new(RecordingSink::new(false)),
        )
        .unwrap();
        assert!(client.auth_headers().get(AUTHORIZATION).is_none());
        assert_eq!(client.url("/api/items"), "http://localhost:8000/api/items");
    }

    #[test]
    fn stored_token_becomes_bearer_header() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(RecordingSink::new(false));
        let client = client_with_sink(sink, dir.path());
        let headers = client.auth_headers();
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
    }
}
