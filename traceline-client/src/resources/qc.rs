//! Quality control endpoints under `/api/qc`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateInspectionPlanRequest, CreateInspectionRequest, InspectionPlanResponse,
    InspectionResponse,
};

impl RestClient {
    /// `GET /api/qc/inspection-plans`
    pub async fn list_inspection_plans(&self) -> Result<Vec<InspectionPlanResponse>, ClientError> {
        self.get_json::<Vec<InspectionPlanResponse>, ()>("/api/qc/inspection-plans", None)
            .await
    }

    /// `POST /api/qc/inspection-plans`
    pub async fn create_inspection_plan(
        &self,
        req: &CreateInspectionPlanRequest,
    ) -> Result<InspectionPlanResponse, ClientError> {
        self.post_json("/api/qc/inspection-plans", req).await
    }

    /// `GET /api/qc/inspections`
    pub async fn list_inspections(&self) -> Result<Vec<InspectionResponse>, ClientError> {
        self.get_json::<Vec<InspectionResponse>, ()>("/api/qc/inspections", None)
            .await
    }

    /// `POST /api/qc/inspections`
    pub async fn create_inspection(
        &self,
        req: &CreateInspectionRequest,
    ) -> Result<InspectionResponse, ClientError> {
        self.post_json("/api/qc/inspections", req).await
    }
}
