//! Dashboard types.

use serde::{Deserialize, Serialize};

/// KPI block from `GET /api/dashboard/kpis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiData {
    pub open_ncs: i64,
    pub open_capas: i64,
    pub open_findings: i64,
    pub overdue_trainings: i64,
    pub open_work_orders: i64,
    pub pending_inspections: i64,
}

/// Labeled series for dashboard charts. Datasets stay loose JSON; chart
/// rendering is out of scope for this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<serde_json::Value>,
}

/// Full dashboard payload from `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub kpis: KpiData,
    pub nc_trend: ChartData,
    pub capa_status: serde_json::Value,
    pub recent_activity: Vec<serde_json::Value>,
}
