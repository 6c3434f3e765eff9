//! Marketing department types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to register a customer (`POST /api/marketing/customers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub customer_code: String,
    pub customer_name: String,
    /// Dealer, Hospital, Distributor
    pub customer_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
}

/// Customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: String,
    pub customer_code: String,
    pub customer_name: String,
    pub customer_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to log an inquiry (`POST /api/marketing/inquiries`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInquiryRequest {
    pub inquiry_date: NaiveDate,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    /// Phone, Email, Visit, Website
    pub mode_of_inquiry: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub item_requirement: Option<String>,
    pub required_quantity: Option<String>,
    pub specific_remarks: Option<String>,
}

/// Inquiry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryResponse {
    pub id: String,
    pub inquiry_no: String,
    pub inquiry_date: NaiveDate,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub mode_of_inquiry: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub item_requirement: Option<String>,
    pub required_quantity: Option<String>,
    pub specific_remarks: Option<String>,
    pub reviewed_by: Option<String>,
    /// Open, Quoted, Converted, Lost
    pub status: Option<String>,
    pub remarks: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to confirm an order (`POST /api/marketing/orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderConfirmationRequest {
    pub oc_date: NaiveDate,
    pub customer_id: String,
    pub product_generic_name: Option<String>,
    pub buyer_name_address: Option<String>,
    pub gstin: Option<String>,
    pub kind_attn: Option<String>,
    pub contact_no: Option<String>,
    pub email_id: Option<String>,
    pub total_amount: Option<f64>,
    pub gst_amount: Option<f64>,
    pub grand_total: Option<f64>,
    pub expected_dispatch: Option<NaiveDate>,
}

/// Order confirmation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmationResponse {
    pub id: String,
    pub oc_number: String,
    pub oc_date: NaiveDate,
    pub customer_id: String,
    pub product_generic_name: Option<String>,
    pub buyer_name_address: Option<String>,
    pub gstin: Option<String>,
    pub total_amount: Option<f64>,
    pub gst_amount: Option<f64>,
    pub grand_total: Option<f64>,
    pub expected_dispatch: Option<NaiveDate>,
    pub prepared_by: Option<String>,
    pub approved_by: Option<String>,
    pub status: Option<String>,
    pub created_at: ApiDateTime,
}

/// Customer complaint record (`GET /api/marketing/complaints`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintResponse {
    pub id: String,
    pub complaint_no: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub complaint_details: Option<String>,
    pub receipt_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub corrective_action_no: Option<String>,
    pub closed_date: Option<NaiveDate>,
    pub closed_by: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub created_at: ApiDateTime,
}
