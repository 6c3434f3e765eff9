//! Error shapes for the Traceline backend.
//!
//! Non-2xx responses carry a JSON body of the form `{"detail": "..."}`. The
//! client decodes that body verbatim and derives a coarse category from the
//! HTTP status code; the category drives presentation only, never recovery.

use serde::{Deserialize, Serialize};

/// Error payload attached to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description of the failure.
    pub detail: String,
}

/// Coarse error category derived from an HTTP status code.
///
/// Auth errors (401) are handled globally by the HTTP adapter; every other
/// category is propagated to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// 401/403 - missing, expired, or insufficient credentials
    Auth,
    /// 400/422 - request failed validation or business rules
    Validation,
    /// 404 - entity does not exist
    NotFound,
    /// 409 - operation conflicts with current server state
    Conflict,
    /// 5xx - server-side failure, no special recovery
    Server,
    /// Anything else
    Other,
}

impl ErrorCategory {
    /// Map an HTTP status code to a category.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorCategory::Auth,
            400 | 422 => ErrorCategory::Validation,
            404 => ErrorCategory::NotFound,
            409 => ErrorCategory::Conflict,
            500..=599 => ErrorCategory::Server,
            _ => ErrorCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_expected_categories() {
        assert_eq!(ErrorCategory::from_status(401), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(403), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(400), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(422), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(404), ErrorCategory::NotFound);
        assert_eq!(ErrorCategory::from_status(409), ErrorCategory::Conflict);
        assert_eq!(ErrorCategory::from_status(500), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(503), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(418), ErrorCategory::Other);
    }

    #[test]
    fn error_body_decodes_backend_shape() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Document not found"}"#).unwrap();
        assert_eq!(body.detail, "Document not found");
    }
}
