//! Store endpoints under `/api/store`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateIndentSlipRequest, CreateMaterialInwardRequest, IndentSlipResponse,
    MaterialInwardResponse, StockRegisterResponse,
};

impl RestClient {
    /// `GET /api/store/material-inward`
    pub async fn list_material_inward(&self) -> Result<Vec<MaterialInwardResponse>, ClientError> {
        self.get_json::<Vec<MaterialInwardResponse>, ()>("/api/store/material-inward", None)
            .await
    }

    /// `POST /api/store/material-inward`
    pub async fn create_material_inward(
        &self,
        req: &CreateMaterialInwardRequest,
    ) -> Result<MaterialInwardResponse, ClientError> {
        self.post_json("/api/store/material-inward", req).await
    }

    /// `GET /api/store/indent-slips`
    pub async fn list_indent_slips(&self) -> Result<Vec<IndentSlipResponse>, ClientError> {
        self.get_json::<Vec<IndentSlipResponse>, ()>("/api/store/indent-slips", None)
            .await
    }

    /// `POST /api/store/indent-slips`
    pub async fn create_indent_slip(
        &self,
        req: &CreateIndentSlipRequest,
    ) -> Result<IndentSlipResponse, ClientError> {
        self.post_json("/api/store/indent-slips", req).await
    }

    /// `GET /api/store/stock-register`
    pub async fn list_stock_register(&self) -> Result<Vec<StockRegisterResponse>, ClientError> {
        self.get_json::<Vec<StockRegisterResponse>, ()>("/api/store/stock-register", None)
            .await
    }
}
