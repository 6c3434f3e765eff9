//! Nonconformance endpoints under `/api/nonconformances`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateNonconformanceRequest, ListNonconformancesRequest, MessageResponse,
    NonconformanceResponse, UpdateNonconformanceRequest,
};

impl RestClient {
    /// `GET /api/nonconformances`
    pub async fn list_nonconformances(
        &self,
        params: &ListNonconformancesRequest,
    ) -> Result<Vec<NonconformanceResponse>, ClientError> {
        self.get_json("/api/nonconformances", Some(params)).await
    }

    /// `GET /api/nonconformances/{id}`
    pub async fn get_nonconformance(
        &self,
        id: &str,
    ) -> Result<NonconformanceResponse, ClientError> {
        self.get_json::<NonconformanceResponse, ()>(&format!("/api/nonconformances/{}", id), None)
            .await
    }

    /// `POST /api/nonconformances`
    pub async fn create_nonconformance(
        &self,
        req: &CreateNonconformanceRequest,
    ) -> Result<NonconformanceResponse, ClientError> {
        self.post_json("/api/nonconformances", req).await
    }

    /// `PUT /api/nonconformances/{id}` - full replacement semantics.
    pub async fn update_nonconformance(
        &self,
        id: &str,
        req: &UpdateNonconformanceRequest,
    ) -> Result<NonconformanceResponse, ClientError> {
        self.put_json(&format!("/api/nonconformances/{}", id), req).await
    }

    /// `DELETE /api/nonconformances/{id}`
    pub async fn delete_nonconformance(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/api/nonconformances/{}", id)).await
    }
}
