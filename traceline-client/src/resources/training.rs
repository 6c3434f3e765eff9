//! Training endpoints under `/api/training-matrix` and
//! `/api/training-records`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CreateTrainingMatrixRequest, CreateTrainingRecordRequest, TrainingMatrixResponse,
    TrainingRecordResponse,
};

impl RestClient {
    /// `GET /api/training-matrix`
    pub async fn list_training_matrix(&self) -> Result<Vec<TrainingMatrixResponse>, ClientError> {
        self.get_json::<Vec<TrainingMatrixResponse>, ()>("/api/training-matrix", None)
            .await
    }

    /// `POST /api/training-matrix`
    pub async fn create_training_matrix_row(
        &self,
        req: &CreateTrainingMatrixRequest,
    ) -> Result<TrainingMatrixResponse, ClientError> {
        self.post_json("/api/training-matrix", req).await
    }

    /// `GET /api/training-records`
    pub async fn list_training_records(&self) -> Result<Vec<TrainingRecordResponse>, ClientError> {
        self.get_json::<Vec<TrainingRecordResponse>, ()>("/api/training-records", None)
            .await
    }

    /// `POST /api/training-records`
    pub async fn create_training_record(
        &self,
        req: &CreateTrainingRecordRequest,
    ) -> Result<TrainingRecordResponse, ClientError> {
        self.post_json("/api/training-records", req).await
    }
}
