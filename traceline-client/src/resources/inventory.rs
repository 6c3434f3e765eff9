//! Inventory endpoints under `/api/inventory`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    AdjustInventoryResponse, CreateInventoryRequest, CreateLotRequest, InventoryResponse,
    InventorySummaryResponse, LotResponse, PageRequest,
};

impl RestClient {
    /// `GET /api/inventory`
    pub async fn list_inventory(
        &self,
        params: &PageRequest,
    ) -> Result<Vec<InventoryResponse>, ClientError> {
        self.get_json("/api/inventory", Some(params)).await
    }

    /// `GET /api/inventory/summary`
    pub async fn get_inventory_summary(&self) -> Result<InventorySummaryResponse, ClientError> {
        self.get_json::<InventorySummaryResponse, ()>("/api/inventory/summary", None)
            .await
    }

    /// `POST /api/inventory`
    pub async fn create_inventory_record(
        &self,
        req: &CreateInventoryRequest,
    ) -> Result<InventoryResponse, ClientError> {
        self.post_json("/api/inventory", req).await
    }

    /// `PATCH /api/inventory/{id}/adjust?quantity_adjustment=&reason=` -
    /// signed adjustment and audit reason ride in the query string.
    pub async fn adjust_inventory(
        &self,
        id: &str,
        quantity_adjustment: f64,
        reason: &str,
    ) -> Result<AdjustInventoryResponse, ClientError> {
        self.patch_query(
            &format!("/api/inventory/{}/adjust", id),
            &[
                ("quantity_adjustment", quantity_adjustment.to_string()),
                ("reason", reason.to_string()),
            ],
        )
        .await
    }

    /// `GET /api/inventory/lots`
    pub async fn list_lots(&self) -> Result<Vec<LotResponse>, ClientError> {
        self.get_json::<Vec<LotResponse>, ()>("/api/inventory/lots", None).await
    }

    /// `POST /api/inventory/lots`
    pub async fn create_lot(&self, req: &CreateLotRequest) -> Result<LotResponse, ClientError> {
        self.post_json("/api/inventory/lots", req).await
    }
}
