//! CAPA endpoints under `/api/caparecords`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CapaResponse, CreateCapaRequest, ListCapasRequest, MessageResponse, UpdateCapaRequest,
};

impl RestClient {
    /// `GET /api/caparecords`
    pub async fn list_capas(
        &self,
        params: &ListCapasRequest,
    ) -> Result<Vec<CapaResponse>, ClientError> {
        self.get_json("/api/caparecords", Some(params)).await
    }

    /// `GET /api/caparecords/{id}`
    pub async fn get_capa(&self, id: &str) -> Result<CapaResponse, ClientError> {
        self.get_json::<CapaResponse, ()>(&format!("/api/caparecords/{}", id), None)
            .await
    }

    /// `POST /api/caparecords`
    pub async fn create_capa(&self, req: &CreateCapaRequest) -> Result<CapaResponse, ClientError> {
        self.post_json("/api/caparecords", req).await
    }

    /// `PUT /api/caparecords/{id}` - full replacement semantics. There is no
    /// delete endpoint for CAPAs; records are closed, never removed.
    pub async fn update_capa(
        &self,
        id: &str,
        req: &UpdateCapaRequest,
    ) -> Result<CapaResponse, ClientError> {
        self.put_json(&format!("/api/caparecords/{}", id), req).await
    }

    /// `POST /api/caparecords/{id}/effectiveness` - query-string parameters.
    /// A result of `Effective` closes the CAPA server-side.
    pub async fn add_capa_effectiveness_check(
        &self,
        id: &str,
        result_status: &str,
        comments: Option<&str>,
    ) -> Result<MessageResponse, ClientError> {
        let mut query: Vec<(&str, &str)> = vec![("result_status", result_status)];
        if let Some(comments) = comments {
            query.push(("comments", comments));
        }
        self.post_query(&format!("/api/caparecords/{}/effectiveness", id), &query)
            .await
    }
}
