//! Purchase endpoints under `/api/purchase`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreatePurchaseOrderRequest, CreateRequisitionRequest, CreateVendorRequest,
    PurchaseOrderResponse, RequisitionResponse, VendorResponse,
};

impl RestClient {
    /// `GET /api/purchase/vendors`
    pub async fn list_vendors(&self) -> Result<Vec<VendorResponse>, ClientError> {
        self.get_json::<Vec<VendorResponse>, ()>("/api/purchase/vendors", None).await
    }

    /// `POST /api/purchase/vendors`
    pub async fn create_vendor(
        &self,
        req: &CreateVendorRequest,
    ) -> Result<VendorResponse, ClientError> {
        self.post_json("/api/purchase/vendors", req).await
    }

    /// `GET /api/purchase/purchase-orders`
    pub async fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrderResponse>, ClientError> {
        self.get_json::<Vec<PurchaseOrderResponse>, ()>("/api/purchase/purchase-orders", None)
            .await
    }

    /// `POST /api/purchase/purchase-orders`
    pub async fn create_purchase_order(
        &self,
        req: &CreatePurchaseOrderRequest,
    ) -> Result<PurchaseOrderResponse, ClientError> {
        self.post_json("/api/purchase/purchase-orders", req).await
    }

    /// `GET /api/purchase/requisitions`
    pub async fn list_requisitions(&self) -> Result<Vec<RequisitionResponse>, ClientError> {
        self.get_json::<Vec<RequisitionResponse>, ()>("/api/purchase/requisitions", None)
            .await
    }

    /// `POST /api/purchase/requisitions`
    pub async fn create_requisition(
        &self,
        req: &CreateRequisitionRequest,
    ) -> Result<RequisitionResponse, ClientError> {
        self.post_json("/api/purchase/requisitions", req).await
    }
}
