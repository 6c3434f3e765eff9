//! Audit endpoints under `/api/audits`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    AuditFindingResponse, AuditResponse, CreateAuditFindingRequest, CreateAuditRequest,
    ListAuditsRequest, MessageResponse, UpdateAuditRequest,
};

impl RestClient {
    /// `GET /api/audits`
    pub async fn list_audits(
        &self,
        params: &ListAuditsRequest,
    ) -> Result<Vec<AuditResponse>, ClientError> {
        self.get_json("/api/audits", Some(params)).await
    }

    /// `GET /api/audits/{id}`
    pub async fn get_audit(&self, id: &str) -> Result<AuditResponse, ClientError> {
        self.get_json::<AuditResponse, ()>(&format!("/api/audits/{}", id), None)
            .await
    }

    /// `POST /api/audits`
    pub async fn create_audit(&self, req: &CreateAuditRequest) -> Result<AuditResponse, ClientError> {
        self.post_json("/api/audits", req).await
    }

    /// `PATCH /api/audits/{id}` - partial update semantics.
    pub async fn update_audit(
        &self,
        id: &str,
        req: &UpdateAuditRequest,
    ) -> Result<AuditResponse, ClientError> {
        self.patch_json(&format!("/api/audits/{}", id), req).await
    }

    /// `DELETE /api/audits/{id}`
    pub async fn delete_audit(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/api/audits/{}", id)).await
    }

    /// `GET /api/audits/{id}/findings`
    pub async fn list_audit_findings(
        &self,
        id: &str,
    ) -> Result<Vec<AuditFindingResponse>, ClientError> {
        self.get_json::<Vec<AuditFindingResponse>, ()>(&format!("/api/audits/{}/findings", id), None)
            .await
    }

    /// `POST /api/audits/{id}/findings`
    pub async fn create_audit_finding(
        &self,
        id: &str,
        req: &CreateAuditFindingRequest,
    ) -> Result<AuditFindingResponse, ClientError> {
        self.post_json(&format!("/api/audits/{}/findings", id), req).await
    }
}
