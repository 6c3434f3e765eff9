//! Item master endpoints under `/api/items`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateItemRequest, ItemResponse, ListItemsRequest, MessageResponse, UpdateItemRequest,
};

impl RestClient {
    /// `GET /api/items`
    pub async fn list_items(
        &self,
        params: &ListItemsRequest,
    ) -> Result<Vec<ItemResponse>, ClientError> {
        self.get_json("/api/items", Some(params)).await
    }

    /// `GET /api/items/{id}`
    pub async fn get_item(&self, id: &str) -> Result<ItemResponse, ClientError> {
        self.get_json::<ItemResponse, ()>(&format!("/api/items/{}", id), None)
            .await
    }

    /// `POST /api/items`
    pub async fn create_item(&self, req: &CreateItemRequest) -> Result<ItemResponse, ClientError> {
        self.post_json("/api/items", req).await
    }

    /// `PATCH /api/items/{id}` - partial update semantics.
    pub async fn update_item(
        &self,
        id: &str,
        req: &UpdateItemRequest,
    ) -> Result<ItemResponse, ClientError> {
        self.patch_json(&format!("/api/items/{}", id), req).await
    }

    /// `DELETE /api/items/{id}`
    pub async fn delete_item(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.delete_json(&format!("/api/items/{}", id)).await
    }
}
