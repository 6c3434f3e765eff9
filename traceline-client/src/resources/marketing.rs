//! Marketing endpoints under `/api/marketing`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    ComplaintResponse, CreateCustomerRequest, CreateInquiryRequest,
    CreateOrderConfirmationRequest, CustomerResponse, InquiryResponse, OrderConfirmationResponse,
};

impl RestClient {
    /// `GET /api/marketing/customers`
    pub async fn list_customers(&self) -> Result<Vec<CustomerResponse>, ClientError> {
        self.get_json::<Vec<CustomerResponse>, ()>("/api/marketing/customers", None)
            .await
    }

    /// `POST /api/marketing/customers`
    pub async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ClientError> {
        self.post_json("/api/marketing/customers", req).await
    }

    /// `GET /api/marketing/inquiries`
    pub async fn list_inquiries(&self) -> Result<Vec<InquiryResponse>, ClientError> {
        self.get_json::<Vec<InquiryResponse>, ()>("/api/marketing/inquiries", None)
            .await
    }

    /// `POST /api/marketing/inquiries`
    pub async fn create_inquiry(
        &self,
        req: &CreateInquiryRequest,
    ) -> Result<InquiryResponse, ClientError> {
        self.post_json("/api/marketing/inquiries", req).await
    }

    /// `GET /api/marketing/orders`
    pub async fn list_order_confirmations(
        &self,
    ) -> Result<Vec<OrderConfirmationResponse>, ClientError> {
        self.get_json::<Vec<OrderConfirmationResponse>, ()>("/api/marketing/orders", None)
            .await
    }

    /// `POST /api/marketing/orders`
    pub async fn create_order_confirmation(
        &self,
        req: &CreateOrderConfirmationRequest,
    ) -> Result<OrderConfirmationResponse, ClientError> {
        self.post_json("/api/marketing/orders", req).await
    }

    /// `GET /api/marketing/complaints`
    pub async fn list_complaints(&self) -> Result<Vec<ComplaintResponse>, ClientError> {
        self.get_json::<Vec<ComplaintResponse>, ()>("/api/marketing/complaints", None)
            .await
    }
}
