//! Dashboard endpoints under `/api/dashboard`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{DashboardResponse, KpiData};

impl RestClient {
    /// `GET /api/dashboard`
    pub async fn get_dashboard(&self) -> Result<DashboardResponse, ClientError> {
        self.get_json::<DashboardResponse, ()>("/api/dashboard", None).await
    }

    /// `GET /api/dashboard/kpis`
    pub async fn get_dashboard_kpis(&self) -> Result<KpiData, ClientError> {
        self.get_json::<KpiData, ()>("/api/dashboard/kpis", None).await
    }
}
