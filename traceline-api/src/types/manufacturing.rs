//! Manufacturing types: items, work orders, QC inspection plans and records.

use super::ApiDateTime;
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Items
// ----------------------------------------------------------------------------

/// Request to register an item (`POST /api/items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item_code: String,
    pub description: String,
    pub item_type: Option<String>,
    pub unit_of_measure: String,
    pub device_class: Option<String>,
    pub udi: Option<String>,
}

/// Partial update (`PATCH /api/items/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub description: Option<String>,
    pub item_type: Option<String>,
    pub item_revision: Option<String>,
    pub device_class: Option<String>,
    pub udi: Option<String>,
    pub status: Option<String>,
}

/// Filters for `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItemsRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub item_type: Option<String>,
}

/// Item master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub item_code: String,
    pub description: String,
    pub item_type: Option<String>,
    pub unit_of_measure: String,
    pub device_class: Option<String>,
    pub udi: Option<String>,
    pub item_revision: String,
    pub status: String,
    pub created_at: ApiDateTime,
}

// ----------------------------------------------------------------------------
// Work orders
// ----------------------------------------------------------------------------

/// Request to open a work order (`POST /api/work-orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkOrderRequest {
    pub item_id: String,
    pub quantity_ordered: f64,
    pub priority: String,
    pub start_date: Option<ApiDateTime>,
    pub scheduled_completion: Option<ApiDateTime>,
    pub lot_number: Option<String>,
    pub notes: Option<String>,
}

/// Partial update (`PATCH /api/work-orders/{id}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateWorkOrderRequest {
    pub quantity_ordered: Option<f64>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub quantity_completed: Option<f64>,
    pub quantity_scrapped: Option<f64>,
}

/// Filters for `GET /api/work-orders`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListWorkOrdersRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// Work order record. `work_order_number` follows `WO-<year>-<seq>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderResponse {
    pub id: String,
    pub work_order_number: String,
    pub item_id: String,
    pub quantity_ordered: f64,
    pub quantity_completed: f64,
    pub quantity_scrapped: f64,
    pub priority: String,
    pub start_date: Option<ApiDateTime>,
    pub scheduled_completion: Option<ApiDateTime>,
    pub lot_number: Option<String>,
    pub notes: Option<String>,
    /// Planned, Released, Completed
    pub status: String,
    pub created_by: String,
    pub created_at: ApiDateTime,
}

// ----------------------------------------------------------------------------
// QC inspections
// ----------------------------------------------------------------------------

/// Request to define an inspection plan (`POST /api/qc/inspection-plans`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInspectionPlanRequest {
    pub item_id: String,
    pub plan_name: String,
    pub inspection_type: Option<String>,
    pub sampling_level: Option<String>,
    pub acceptance_criteria: Option<String>,
}

/// Inspection plan record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionPlanResponse {
    pub id: String,
    pub item_id: String,
    pub plan_name: String,
    pub inspection_type: Option<String>,
    pub sampling_level: Option<String>,
    pub acceptance_criteria: Option<String>,
    pub status: String,
    pub created_at: ApiDateTime,
}

/// Request to log an inspection (`POST /api/qc/inspections`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInspectionRequest {
    pub work_order_id: String,
    pub inspection_plan_id: String,
    pub lot_number: Option<String>,
    pub sample_size: Option<i64>,
}

/// Inspection record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionResponse {
    pub id: String,
    pub work_order_id: String,
    pub inspection_plan_id: String,
    pub lot_number: Option<String>,
    pub sample_size: Option<i64>,
    pub inspector_id: String,
    pub inspection_date: ApiDateTime,
    pub status: String,
    pub disposition: Option<String>,
}
