//! Purchase department types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to register a vendor (`POST /api/purchase/vendors`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVendorRequest {
    pub vendor_code: String,
    pub vendor_name: String,
    pub office_address: Option<String>,
    pub office_phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub gst_no: Option<String>,
    pub products_services: Option<String>,
    pub is_iso_certified: Option<bool>,
    pub iso_certificate_no: Option<String>,
}

/// Vendor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorResponse {
    pub id: String,
    pub vendor_code: String,
    pub vendor_name: String,
    pub office_address: Option<String>,
    pub office_phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub gst_no: Option<String>,
    pub products_services: Option<String>,
    pub is_iso_certified: Option<bool>,
    pub iso_certificate_no: Option<String>,
    pub approval_status: Option<String>,
    pub approval_date: Option<NaiveDate>,
    pub is_critical_item_vendor: Option<bool>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to raise a purchase order (`POST /api/purchase/purchase-orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    pub po_date: NaiveDate,
    pub vendor_id: String,
    pub vendor_address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_no: Option<String>,
    pub email_id: Option<String>,
    pub supplier_gst: Option<String>,
    pub total_amount: Option<f64>,
    pub delivery_period: Option<String>,
    pub payment_terms: Option<String>,
}

/// Purchase order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderResponse {
    pub id: String,
    pub po_number: String,
    pub po_date: NaiveDate,
    pub vendor_id: String,
    pub vendor_address: Option<String>,
    pub contact_person: Option<String>,
    pub supplier_gst: Option<String>,
    pub approval_status: Option<String>,
    pub total_amount: Option<f64>,
    pub delivery_period: Option<String>,
    pub payment_terms: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to raise a requisition (`POST /api/purchase/requisitions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRequisitionRequest {
    pub pr_date: NaiveDate,
    pub from_department: Option<String>,
    pub to_department: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<f64>,
    pub make_spec_size: Option<String>,
    pub unit: Option<String>,
    pub needed_by: Option<NaiveDate>,
    pub requested_by: Option<String>,
}

/// Purchase requisition record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionResponse {
    pub id: String,
    pub pr_number: String,
    pub pr_date: NaiveDate,
    pub from_department: Option<String>,
    pub to_department: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<f64>,
    pub make_spec_size: Option<String>,
    pub unit: Option<String>,
    pub needed_by: Option<NaiveDate>,
    pub requested_by: Option<String>,
    pub approved_by: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}
