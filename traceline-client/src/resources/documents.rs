//! Document control endpoints under `/api/documents`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateDocumentRequest, DocumentResponse, DocumentVersionResponse, ListDocumentsRequest,
    MessageResponse, UpdateDocumentRequest, UploadResponse,
};

impl RestClient {
    /// `GET /api/documents`
    pub async fn list_documents(
        &self,
        params: &ListDocumentsRequest,
    ) -> Result<Vec<DocumentResponse>, ClientError> {
        self.get_json("/api/documents", Some(params)).await
    }

    /// `GET /api/documents/{id}`
    pub async fn get_document(&self, id: &str) -> Result<DocumentResponse, ClientError> {
        self.get_json::<DocumentResponse, ()>(&format!("/api/documents/{}", id), None)
            .await
    }

    /// `POST /api/documents`
    pub async fn create_document(
        &self,
        req: &CreateDocumentRequest,
    ) -> Result<DocumentResponse, ClientError> {
        self.post_json("/api/documents", req).await
    }

    /// `PUT /api/documents/{id}` - full replacement semantics.
    pub async fn update_document(
        &self,
        id: &str,
        req: &UpdateDocumentRequest,
    ) -> Result<DocumentResponse, ClientError> {
        self.put_json(&format!("/api/documents/{}", id), req).await
    }

    /// `DELETE /api/documents/{id}`
    pub async fn delete_document(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/api/documents/{}", id)).await
    }

    /// `POST /api/documents/{id}/approve`
    pub async fn approve_document(&self, id: &str) -> Result<DocumentResponse, ClientError> {
        self.post_empty(&format!("/api/documents/{}/approve", id)).await
    }

    /// `GET /api/documents/{id}/versions`
    pub async fn list_document_versions(
        &self,
        id: &str,
    ) -> Result<Vec<DocumentVersionResponse>, ClientError> {
        self.get_json::<Vec<DocumentVersionResponse>, ()>(
            &format!("/api/documents/{}/versions", id),
            None,
        )
        .await
    }

    /// `POST /api/documents/{id}/upload` - multipart, field name `file`.
    pub async fn upload_document_file(
        &self,
        id: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResponse, ClientError> {
        let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart(&format!("/api/documents/{}/upload", id), form)
            .await
    }

    /// `GET /api/documents/{id}/download` - opaque binary body.
    pub async fn download_document_file(&self, id: &str) -> Result<Vec<u8>, ClientError> {
        self.get_bytes(&format!("/api/documents/{}/download", id)).await
    }
}
