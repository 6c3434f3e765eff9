//! HR endpoints under `/api/hr`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CompetencyMatrixResponse, CreateEmployeeRequest, CreateTrainingSessionRequest,
    EmployeeResponse, HrStatsResponse, TrainingSessionResponse,
};

impl RestClient {
    /// `GET /api/hr/employees`
    pub async fn list_employees(&self) -> Result<Vec<EmployeeResponse>, ClientError> {
        self.get_json::<Vec<EmployeeResponse>, ()>("/api/hr/employees", None).await
    }

    /// `POST /api/hr/employees`
    pub async fn create_employee(
        &self,
        req: &CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, ClientError> {
        self.post_json("/api/hr/employees", req).await
    }

    /// `GET /api/hr/training-sessions`
    pub async fn list_training_sessions(&self) -> Result<Vec<TrainingSessionResponse>, ClientError> {
        self.get_json::<Vec<TrainingSessionResponse>, ()>("/api/hr/training-sessions", None)
            .await
    }

    /// `POST /api/hr/training-sessions`
    pub async fn create_training_session(
        &self,
        req: &CreateTrainingSessionRequest,
    ) -> Result<TrainingSessionResponse, ClientError> {
        self.post_json("/api/hr/training-sessions", req).await
    }

    /// `GET /api/hr/stats`
    pub async fn get_hr_stats(&self) -> Result<HrStatsResponse, ClientError> {
        self.get_json::<HrStatsResponse, ()>("/api/hr/stats", None).await
    }

    /// `GET /api/hr/competency-matrix`
    pub async fn list_competency_matrix(
        &self,
    ) -> Result<Vec<CompetencyMatrixResponse>, ClientError> {
        self.get_json::<Vec<CompetencyMatrixResponse>, ()>("/api/hr/competency-matrix", None)
            .await
    }
}
