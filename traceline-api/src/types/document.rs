//! Document control types.

use super::ApiDateTime;
use serde::{Deserialize, Serialize};

/// Request to create a document (`POST /api/documents`). The server assigns
/// `doc_number` from the document type prefix (SOP-, WI-, FRM-, POL-).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub description: Option<String>,
    pub document_type: String,
}

/// Full-replacement update (`PUT /api/documents/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Filters for `GET /api/documents`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListDocumentsRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub document_type: Option<String>,
    pub search: Option<String>,
}

/// Document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    pub doc_number: String,
    pub title: String,
    pub description: Option<String>,
    pub document_type: String,
    /// Draft, Under Review, Approved, Obsolete
    pub status: String,
    pub current_revision: i32,
    pub created_by: String,
    pub created_at: ApiDateTime,
    pub updated_at: ApiDateTime,
}

/// One revision row from `GET /api/documents/{id}/versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVersionResponse {
    pub id: String,
    pub document_id: String,
    pub revision_number: i32,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub change_summary: Option<String>,
    pub created_by: String,
    pub created_at: ApiDateTime,
}

/// Acknowledgement for `POST /api/documents/{id}/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}
