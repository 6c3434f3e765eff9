//! Maintenance endpoints under `/api/maintenance`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    BreakdownResponse, CleaningRecordResponse, CreateBreakdownRequest, CreateEquipmentRequest,
    CreatePreventiveMaintenanceRequest, EquipmentResponse, PreventiveMaintenanceResponse,
};

impl RestClient {
    /// `GET /api/maintenance/equipment`
    pub async fn list_equipment(&self) -> Result<Vec<EquipmentResponse>, ClientError> {
        self.get_json::<Vec<EquipmentResponse>, ()>("/api/maintenance/equipment", None)
            .await
    }

    /// `POST /api/maintenance/equipment`
    pub async fn create_equipment(
        &self,
        req: &CreateEquipmentRequest,
    ) -> Result<EquipmentResponse, ClientError> {
        self.post_json("/api/maintenance/equipment", req).await
    }

    /// `GET /api/maintenance/preventive-maintenance`
    pub async fn list_preventive_maintenance(
        &self,
    ) -> Result<Vec<PreventiveMaintenanceResponse>, ClientError> {
        self.get_json::<Vec<PreventiveMaintenanceResponse>, ()>(
            "/api/maintenance/preventive-maintenance",
            None,
        )
        .await
    }

    /// `POST /api/maintenance/preventive-maintenance`
    pub async fn create_preventive_maintenance(
        &self,
        req: &CreatePreventiveMaintenanceRequest,
    ) -> Result<PreventiveMaintenanceResponse, ClientError> {
        self.post_json("/api/maintenance/preventive-maintenance", req).await
    }

    /// `GET /api/maintenance/breakdowns`
    pub async fn list_breakdowns(&self) -> Result<Vec<BreakdownResponse>, ClientError> {
        self.get_json::<Vec<BreakdownResponse>, ()>("/api/maintenance/breakdowns", None)
            .await
    }

    /// `POST /api/maintenance/breakdowns`
    pub async fn create_breakdown(
        &self,
        req: &CreateBreakdownRequest,
    ) -> Result<BreakdownResponse, ClientError> {
        self.post_json("/api/maintenance/breakdowns", req).await
    }

    /// `GET /api/maintenance/cleaning-records`
    pub async fn list_cleaning_records(&self) -> Result<Vec<CleaningRecordResponse>, ClientError> {
        self.get_json::<Vec<CleaningRecordResponse>, ()>("/api/maintenance/cleaning-records", None)
            .await
    }
}
