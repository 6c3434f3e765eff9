//! Management representative / QA types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to plan the yearly audit schedule
/// (`POST /api/mr/audit-schedules`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuditScheduleRequest {
    pub year: i32,
    pub department: String,
    pub prepared_by: Option<String>,
    pub schedule_date: Option<NaiveDate>,
}

/// Yearly audit schedule row: one department, planned month slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditScheduleResponse {
    pub id: String,
    pub year: i32,
    pub department: String,
    pub jan_planned: Option<bool>,
    pub feb_planned: Option<bool>,
    pub mar_planned: Option<bool>,
    pub apr_planned: Option<bool>,
    pub may_planned: Option<bool>,
    pub jun_planned: Option<bool>,
    pub jul_planned: Option<bool>,
    pub aug_planned: Option<bool>,
    pub sep_planned: Option<bool>,
    pub oct_planned: Option<bool>,
    pub nov_planned: Option<bool>,
    pub dec_planned: Option<bool>,
    pub prepared_by: Option<String>,
    pub schedule_date: Option<NaiveDate>,
    pub created_at: ApiDateTime,
}

/// Request to minute a management review meeting
/// (`POST /api/mr/management-reviews`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateManagementReviewRequest {
    pub meeting_no: String,
    pub meeting_date: NaiveDate,
    pub meeting_time: Option<String>,
    pub attendees: Option<String>,
    pub agenda: Option<String>,
    pub audit_results: Option<String>,
    pub customer_feedback: Option<String>,
    pub quality_objectives: Option<String>,
    pub capa_status: Option<String>,
}

/// Management review meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementReviewResponse {
    pub id: String,
    pub meeting_no: String,
    pub meeting_date: NaiveDate,
    pub meeting_time: Option<String>,
    pub next_meeting_date: Option<NaiveDate>,
    pub attendees: Option<String>,
    pub agenda: Option<String>,
    pub audit_results: Option<String>,
    pub customer_feedback: Option<String>,
    pub quality_objectives: Option<String>,
    pub capa_status: Option<String>,
    pub improvement_recommendations: Option<String>,
    pub created_at: ApiDateTime,
}

/// Corrective action report row (`GET /api/mr/corrective-actions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectiveActionResponse {
    pub id: String,
    pub car_number: Option<String>,
    pub car_date: Option<NaiveDate>,
    pub audit_reference: Option<String>,
    pub standard_reference: Option<String>,
    pub clause_no: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}
