//! Maintenance department types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to register equipment (`POST /api/maintenance/equipment`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEquipmentRequest {
    pub equipment_id: String,
    pub equipment_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub source_of_maintenance: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
}

/// Equipment master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentResponse {
    pub id: String,
    pub equipment_id: String,
    pub equipment_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub source_of_maintenance: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to log a preventive maintenance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePreventiveMaintenanceRequest {
    pub equipment_id: Option<String>,
    pub equipment_name: Option<String>,
    pub equipment_id_no: Option<String>,
    pub month_year: Option<String>,
    pub check_points: Option<String>,
    pub frequency: Option<String>,
    pub checked_by: Option<String>,
}

/// Preventive maintenance check record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreventiveMaintenanceResponse {
    pub id: String,
    pub equipment_id: Option<String>,
    pub equipment_name: Option<String>,
    pub equipment_id_no: Option<String>,
    pub month_year: Option<String>,
    pub check_points: Option<String>,
    pub frequency: Option<String>,
    pub check_status: Option<String>,
    pub checked_by: Option<String>,
    pub verified_by: Option<String>,
    pub remarks: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to log a breakdown (`POST /api/maintenance/breakdowns`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBreakdownRequest {
    pub machine_id_no: Option<String>,
    pub machine_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub description: Option<String>,
    pub maintenance_details: Option<String>,
}

/// Breakdown record. `breakdown_no` is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub id: String,
    pub breakdown_no: Option<String>,
    pub machine_id_no: Option<String>,
    pub machine_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<String>,
    pub total_hours: Option<f64>,
    pub description: Option<String>,
    pub maintenance_details: Option<String>,
    pub corrective_action_needed: Option<bool>,
    pub corrective_action_details: Option<String>,
    pub remarks: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Daily cleaning checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningRecordResponse {
    pub id: String,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub area: Option<String>,
    pub day: Option<i32>,
    pub is_cleaned: Option<bool>,
    pub done_by: Option<String>,
    pub time: Option<String>,
    pub remarks: Option<String>,
    pub created_at: ApiDateTime,
}
