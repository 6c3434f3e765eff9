//! Store department types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to log a goods receipt (`POST /api/store/material-inward`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMaterialInwardRequest {
    pub po_no: Option<String>,
    pub po_date: Option<NaiveDate>,
    pub inward_date: NaiveDate,
    pub bill_no: Option<String>,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<f64>,
    pub uom: Option<String>,
    pub party_name: Option<String>,
    pub received_by: Option<String>,
}

/// Goods receipt record. `grn_number` is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInwardResponse {
    pub id: String,
    pub grn_number: String,
    pub po_no: Option<String>,
    pub po_date: Option<NaiveDate>,
    pub inward_date: NaiveDate,
    pub bill_no: Option<String>,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<f64>,
    pub uom: Option<String>,
    pub party_name: Option<String>,
    pub received_by: Option<String>,
    pub qc_status: Option<String>,
    pub release_no: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to raise an indent slip (`POST /api/store/indent-slips`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndentSlipRequest {
    pub indent_date: NaiveDate,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub size_specification: Option<String>,
    pub qty_required: Option<f64>,
    pub requested_by: Option<String>,
    pub requesting_department: Option<String>,
    pub purpose: Option<String>,
}

/// Indent slip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndentSlipResponse {
    pub id: String,
    pub indent_number: String,
    pub indent_date: NaiveDate,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub size_specification: Option<String>,
    pub qty_required: Option<f64>,
    pub qty_issued: Option<f64>,
    pub batch_number: Option<String>,
    pub requested_by: Option<String>,
    pub requesting_department: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// One stock register row (`GET /api/store/stock-register`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRegisterResponse {
    pub id: String,
    pub item_id: Option<String>,
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub warehouse_location: Option<String>,
    pub bin_location: Option<String>,
    pub opening_balance: Option<f64>,
    pub quantity_received: Option<f64>,
    pub quantity_issued: Option<f64>,
    pub closing_balance: Option<f64>,
    pub reorder_level: Option<f64>,
    pub last_receipt_date: Option<NaiveDate>,
    pub last_issue_date: Option<NaiveDate>,
    pub updated_at: ApiDateTime,
}
