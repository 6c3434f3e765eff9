//! Management representative endpoints under `/api/mr`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    AuditScheduleResponse, CorrectiveActionResponse, CreateAuditScheduleRequest,
    CreateManagementReviewRequest, ManagementReviewResponse,
};

impl RestClient {
    /// `GET /api/mr/audit-schedules`
    pub async fn list_audit_schedules(&self) -> Result<Vec<AuditScheduleResponse>, ClientError> {
        self.get_json::<Vec<AuditScheduleResponse>, ()>("/api/mr/audit-schedules", None)
            .await
    }

    /// `POST /api/mr/audit-schedules`
    pub async fn create_audit_schedule(
        &self,
        req: &CreateAuditScheduleRequest,
    ) -> Result<AuditScheduleResponse, ClientError> {
        self.post_json("/api/mr/audit-schedules", req).await
    }

    /// `GET /api/mr/management-reviews`
    pub async fn list_management_reviews(
        &self,
    ) -> Result<Vec<ManagementReviewResponse>, ClientError> {
        self.get_json::<Vec<ManagementReviewResponse>, ()>("/api/mr/management-reviews", None)
            .await
    }

    /// `POST /api/mr/management-reviews`
    pub async fn create_management_review(
        &self,
        req: &CreateManagementReviewRequest,
    ) -> Result<ManagementReviewResponse, ClientError> {
        self.post_json("/api/mr/management-reviews", req).await
    }

    /// `GET /api/mr/corrective-actions`
    pub async fn list_corrective_actions(
        &self,
    ) -> Result<Vec<CorrectiveActionResponse>, ClientError> {
        self.get_json::<Vec<CorrectiveActionResponse>, ()>("/api/mr/corrective-actions", None)
            .await
    }
}
