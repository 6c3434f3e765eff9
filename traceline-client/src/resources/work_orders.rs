//! Work order endpoints under `/api/work-orders`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateWorkOrderRequest, ListWorkOrdersRequest, MessageResponse, UpdateWorkOrderRequest,
    WorkOrderResponse,
};

impl RestClient {
    /// `GET /api/work-orders`
    pub async fn list_work_orders(
        &self,
        params: &ListWorkOrdersRequest,
    ) -> Result<Vec<WorkOrderResponse>, ClientError> {
        self.get_json("/api/work-orders", Some(params)).await
    }

    /// `GET /api/work-orders/{id}`
    pub async fn get_work_order(&self, id: &str) -> Result<WorkOrderResponse, ClientError> {
        self.get_json::<WorkOrderResponse, ()>(&format!("/api/work-orders/{}", id), None)
            .await
    }

    /// `POST /api/work-orders`
    pub async fn create_work_order(
        &self,
        req: &CreateWorkOrderRequest,
    ) -> Result<WorkOrderResponse, ClientError> {
        self.post_json("/api/work-orders", req).await
    }

    /// `PATCH /api/work-orders/{id}` - partial update semantics.
    pub async fn update_work_order(
        &self,
        id: &str,
        req: &UpdateWorkOrderRequest,
    ) -> Result<WorkOrderResponse, ClientError> {
        self.patch_json(&format!("/api/work-orders/{}", id), req).await
    }

    /// `DELETE /api/work-orders/{id}`
    pub async fn delete_work_order(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/api/work-orders/{}", id)).await
    }

    /// `POST /api/work-orders/{id}/release` - moves the order to Released
    /// and stamps its start date.
    pub async fn release_work_order(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.post_empty(&format!("/api/work-orders/{}/release", id)).await
    }

    /// `PATCH /api/work-orders/{id}/complete?quantity_completed=` - completes
    /// the order; the quantity rides in the query string, not the body.
    pub async fn complete_work_order(
        &self,
        id: &str,
        quantity_completed: f64,
    ) -> Result<MessageResponse, ClientError> {
        self.patch_query(
            &format!("/api/work-orders/{}/complete", id),
            &[("quantity_completed", quantity_completed)],
        )
        .await
    }
}
