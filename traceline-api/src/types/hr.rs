//! HR department types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to register an employee (`POST /api/hr/employees`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_code: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub education_degree: Option<String>,
    pub institution: Option<String>,
}

/// Employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub employee_code: String,
    pub user_id: Option<String>,
    pub full_name: String,
    pub gender: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub education_degree: Option<String>,
    pub institution: Option<String>,
    pub status: String,
    pub created_at: ApiDateTime,
}

/// Request to schedule a training session (`POST /api/hr/training-sessions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrainingSessionRequest {
    pub training_no: String,
    pub subject: String,
    pub venue: Option<String>,
    pub faculty_name: Option<String>,
    pub training_date: NaiveDate,
    pub training_time: Option<String>,
    pub num_participants: Option<i32>,
}

/// Training session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSessionResponse {
    pub id: String,
    pub training_no: String,
    pub subject: String,
    pub venue: Option<String>,
    pub faculty_name: Option<String>,
    pub training_date: NaiveDate,
    pub training_time: Option<String>,
    pub num_participants: Option<i32>,
    pub status: String,
    pub created_at: ApiDateTime,
}

/// Aggregates from `GET /api/hr/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrStatsResponse {
    pub total_employees: i64,
    pub active_employees: i64,
    pub scheduled_trainings: i64,
    pub completed_trainings: i64,
}

/// One row from `GET /api/hr/competency-matrix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyMatrixResponse {
    pub id: String,
    pub employee_id: String,
    pub date: Option<NaiveDate>,
    pub designation: Option<String>,
    pub min_education_required: Option<String>,
    pub min_education_available: Option<String>,
    pub min_experience_required: Option<String>,
    pub min_experience_available: Option<String>,
    pub min_skills_required: Option<String>,
    pub min_skills_available: Option<String>,
    pub min_training_required: Option<String>,
    pub min_training_available: Option<String>,
    pub is_competent: bool,
    pub remarks: Option<String>,
    pub created_at: ApiDateTime,
}
