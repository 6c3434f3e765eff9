//! Inventory and lot tracking types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to create an inventory record (`POST /api/inventory`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInventoryRequest {
    pub item_id: String,
    pub warehouse_location: String,
    pub bin_location: Option<String>,
    pub quantity_on_hand: f64,
}

/// Inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub id: String,
    pub item_id: String,
    pub warehouse_location: String,
    pub bin_location: Option<String>,
    pub quantity_on_hand: f64,
    pub quantity_reserved: f64,
    pub quantity_available: f64,
    pub updated_at: ApiDateTime,
}

/// Body returned by `PATCH /api/inventory/{id}/adjust`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustInventoryResponse {
    pub message: String,
    pub adjustment: f64,
    pub new_quantity: f64,
    pub reason: String,
}

/// Aggregate block from `GET /api/inventory/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummaryResponse {
    pub total_records: i64,
    pub total_quantity_on_hand: f64,
    /// Records with fewer than 10 units available.
    pub low_stock_items: i64,
    pub active_lots: i64,
}

/// Request to register a lot (`POST /api/inventory/lots`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLotRequest {
    pub item_id: String,
    pub lot_number: String,
    pub manufacturing_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub quantity_manufactured: Option<f64>,
}

/// Lot tracking record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotResponse {
    pub id: String,
    pub item_id: String,
    pub lot_number: String,
    pub manufacturing_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub quantity_manufactured: Option<f64>,
    pub quantity_remaining: Option<f64>,
    pub status: String,
    pub created_at: ApiDateTime,
}
