//! Quality types: nonconformances, CAPAs, audits and findings.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Nonconformances
// ----------------------------------------------------------------------------

/// Request to raise a nonconformance (`POST /api/nonconformances`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNonconformanceRequest {
    pub title: String,
    pub description: String,
    pub severity: Option<String>,
    pub source: Option<String>,
    pub product_affected: Option<String>,
    pub lot_number: Option<String>,
    pub quantity_affected: Option<i64>,
    pub discovered_date: NaiveDate,
    pub discovered_by: Option<String>,
}

/// Full-replacement update (`PUT /api/nonconformances/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateNonconformanceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub root_cause_category: Option<String>,
    pub immediate_action: Option<String>,
    pub assigned_to: Option<String>,
}

/// Filters for `GET /api/nonconformances`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListNonconformancesRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// Nonconformance record. `nc_number` follows `NC-<year>-<seq>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonconformanceResponse {
    pub id: String,
    pub nc_number: String,
    pub title: String,
    pub description: String,
    pub severity: Option<String>,
    pub source: Option<String>,
    pub product_affected: Option<String>,
    pub lot_number: Option<String>,
    pub quantity_affected: Option<i64>,
    pub discovered_date: NaiveDate,
    pub discovered_by: Option<String>,
    /// Open, Under Investigation, Closed
    pub status: String,
    pub created_by: String,
    pub created_at: ApiDateTime,
    pub updated_at: ApiDateTime,
}

// ----------------------------------------------------------------------------
// CAPAs
// ----------------------------------------------------------------------------

/// Request to open a CAPA (`POST /api/caparecords`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCapaRequest {
    pub title: String,
    pub capa_type: Option<String>,
    pub description: Option<String>,
    pub nc_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub owner_id: String,
}

/// Full-replacement update (`PUT /api/caparecords/{id}`). The backend exposes
/// no delete endpoint for CAPAs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateCapaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub root_cause: Option<String>,
    pub root_cause_method: Option<String>,
    pub corrective_action: Option<String>,
    pub preventive_action: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Filters for `GET /api/caparecords`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListCapasRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// CAPA record. `capa_number` follows `CAPA-<year>-<seq>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapaResponse {
    pub id: String,
    pub capa_number: String,
    pub title: String,
    pub capa_type: Option<String>,
    pub description: Option<String>,
    pub nc_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub root_cause: Option<String>,
    pub corrective_action: Option<String>,
    pub preventive_action: Option<String>,
    pub owner_id: String,
    pub status: String,
    pub created_at: ApiDateTime,
}

// ----------------------------------------------------------------------------
// Audits
// ----------------------------------------------------------------------------

/// Request to schedule an audit (`POST /api/audits`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuditRequest {
    pub title: String,
    pub audit_type: Option<String>,
    pub scope: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub auditee_department: Option<String>,
    pub led_by: String,
}

/// Partial update (`PATCH /api/audits/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateAuditRequest {
    pub title: Option<String>,
    pub scope: Option<String>,
    pub status: Option<String>,
    pub summary: Option<String>,
    pub end_date: Option<NaiveDate>,
}

/// Filters for `GET /api/audits`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListAuditsRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// Audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResponse {
    pub id: String,
    pub audit_number: String,
    pub title: String,
    pub audit_type: Option<String>,
    pub scope: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub auditee_department: Option<String>,
    pub led_by: String,
    pub status: String,
    pub created_at: ApiDateTime,
}

/// Request to record an audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuditFindingRequest {
    pub audit_id: String,
    pub finding_text: String,
    pub finding_type: Option<String>,
    pub severity: Option<String>,
    pub category: Option<String>,
    pub clause_reference: Option<String>,
}

/// Audit finding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFindingResponse {
    pub id: String,
    pub audit_id: String,
    pub finding_number: Option<String>,
    pub finding_text: String,
    pub finding_type: Option<String>,
    pub severity: Option<String>,
    pub category: Option<String>,
    pub clause_reference: Option<String>,
    pub status: String,
    pub created_at: ApiDateTime,
}
