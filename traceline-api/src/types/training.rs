//! Training matrix and training record types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to add a matrix row (`POST /api/training-matrix`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrainingMatrixRequest {
    pub role_id: String,
    pub training_name: String,
    pub training_code: Option<String>,
    pub description: Option<String>,
    pub is_required: bool,
    pub frequency_months: Option<i32>,
}

/// One row of the role/training requirement matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMatrixResponse {
    pub id: String,
    pub role_id: String,
    pub training_name: String,
    pub training_code: Option<String>,
    pub description: Option<String>,
    pub is_required: bool,
    pub frequency_months: Option<i32>,
    pub created_at: ApiDateTime,
}

/// Request to log a completed training (`POST /api/training-records`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrainingRecordRequest {
    pub employee_id: String,
    pub training_id: String,
    pub completion_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub is_certified: bool,
    pub trainer: Option<String>,
    pub notes: Option<String>,
}

/// Training record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecordResponse {
    pub id: String,
    pub employee_id: String,
    pub training_id: String,
    pub completion_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub is_certified: bool,
    pub trainer: Option<String>,
    pub notes: Option<String>,
    pub created_at: ApiDateTime,
}
