//! Resource kinds for cache keys and invalidation.
//!
//! Every dataset the client caches is identified by a `ResourceKind` rather
//! than a free-form string, so a mutation's invalidation set is checkable at
//! compile time. Kinds carry a slash-separated canonical name; invalidating a
//! kind also covers every kind nested under it (e.g. `Inventory` covers
//! `inventory/lots` and `inventory/summary`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for one cacheable dataset exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Documents,
    Nonconformances,
    Capas,
    Audits,
    Items,
    WorkOrders,
    TrainingMatrix,
    TrainingRecords,
    Users,
    Roles,
    Inventory,
    InventorySummary,
    InventoryLots,
    InspectionPlans,
    Inspections,
    Employees,
    TrainingSessions,
    HrStats,
    CompetencyMatrix,
    Equipment,
    PreventiveMaintenance,
    Breakdowns,
    CleaningRecords,
    Customers,
    Inquiries,
    OrderConfirmations,
    Complaints,
    Vendors,
    PurchaseOrders,
    Requisitions,
    MaterialInward,
    IndentSlips,
    StockRegister,
    AuditSchedules,
    ManagementReviews,
    CorrectiveActions,
    LeakTests,
    Calibrations,
    FumigationRecords,
    DistilledWaterTests,
    Dashboard,
    DashboardKpis,
}

impl ResourceKind {
    /// All kinds, in a stable order.
    pub const ALL: &'static [ResourceKind] = &[
        ResourceKind::Documents,
        ResourceKind::Nonconformances,
        ResourceKind::Capas,
        ResourceKind::Audits,
        ResourceKind::Items,
        ResourceKind::WorkOrders,
        ResourceKind::TrainingMatrix,
        ResourceKind::TrainingRecords,
        ResourceKind::Users,
        ResourceKind::Roles,
        ResourceKind::Inventory,
        ResourceKind::InventorySummary,
        ResourceKind::InventoryLots,
        ResourceKind::InspectionPlans,
        ResourceKind::Inspections,
        ResourceKind::Employees,
        ResourceKind::TrainingSessions,
        ResourceKind::HrStats,
        ResourceKind::CompetencyMatrix,
        ResourceKind::Equipment,
        ResourceKind::PreventiveMaintenance,
        ResourceKind::Breakdowns,
        ResourceKind::CleaningRecords,
        ResourceKind::Customers,
        ResourceKind::Inquiries,
        ResourceKind::OrderConfirmations,
        ResourceKind::Complaints,
        ResourceKind::Vendors,
        ResourceKind::PurchaseOrders,
        ResourceKind::Requisitions,
        ResourceKind::MaterialInward,
        ResourceKind::IndentSlips,
        ResourceKind::StockRegister,
        ResourceKind::AuditSchedules,
        ResourceKind::ManagementReviews,
        ResourceKind::CorrectiveActions,
        ResourceKind::LeakTests,
        ResourceKind::Calibrations,
        ResourceKind::FumigationRecords,
        ResourceKind::DistilledWaterTests,
        ResourceKind::Dashboard,
        ResourceKind::DashboardKpis,
    ];

    /// Canonical name used in cache keys. Nested datasets are slash-separated
    /// under their parent resource.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Documents => "documents",
            ResourceKind::Nonconformances => "nonconformances",
            ResourceKind::Capas => "capas",
            ResourceKind::Audits => "audits",
            ResourceKind::Items => "items",
            ResourceKind::WorkOrders => "work-orders",
            ResourceKind::TrainingMatrix => "training-matrix",
            ResourceKind::TrainingRecords => "training-records",
            ResourceKind::Users => "users",
            ResourceKind::Roles => "roles",
            ResourceKind::Inventory => "inventory",
            ResourceKind::InventorySummary => "inventory/summary",
            ResourceKind::InventoryLots => "inventory/lots",
            ResourceKind::InspectionPlans => "qc/inspection-plans",
            ResourceKind::Inspections => "qc/inspections",
            ResourceKind::Employees => "hr/employees",
            ResourceKind::TrainingSessions => "hr/training-sessions",
            ResourceKind::HrStats => "hr/stats",
            ResourceKind::CompetencyMatrix => "hr/competency-matrix",
            ResourceKind::Equipment => "maintenance/equipment",
            ResourceKind::PreventiveMaintenance => "maintenance/preventive",
            ResourceKind::Breakdowns => "maintenance/breakdowns",
            ResourceKind::CleaningRecords => "maintenance/cleaning-records",
            ResourceKind::Customers => "marketing/customers",
            ResourceKind::Inquiries => "marketing/inquiries",
            ResourceKind::OrderConfirmations => "marketing/orders",
            ResourceKind::Complaints => "marketing/complaints",
            ResourceKind::Vendors => "purchase/vendors",
            ResourceKind::PurchaseOrders => "purchase/purchase-orders",
            ResourceKind::Requisitions => "purchase/requisitions",
            ResourceKind::MaterialInward => "store/material-inward",
            ResourceKind::IndentSlips => "store/indent-slips",
            ResourceKind::StockRegister => "store/stock-register",
            ResourceKind::AuditSchedules => "mr/audit-schedules",
            ResourceKind::ManagementReviews => "mr/management-reviews",
            ResourceKind::CorrectiveActions => "mr/corrective-actions",
            ResourceKind::LeakTests => "qc-extended/leak-tests",
            ResourceKind::Calibrations => "qc-extended/calibrations",
            ResourceKind::FumigationRecords => "qc-extended/fumigation-records",
            ResourceKind::DistilledWaterTests => "qc-extended/distilled-water-tests",
            ResourceKind::Dashboard => "dashboard",
            ResourceKind::DashboardKpis => "dashboard/kpis",
        }
    }

    /// Whether invalidating `self` also invalidates `other`.
    ///
    /// True when the kinds are equal, or when `other` is nested under `self`
    /// in the canonical name hierarchy.
    pub fn covers(&self, other: ResourceKind) -> bool {
        if *self == other {
            return true;
        }
        other
            .name()
            .strip_prefix(self.name())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ResourceKind: {0}")]
pub struct ResourceKindParseError(pub String);

impl FromStr for ResourceKind {
    type Err = ResourceKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ResourceKindParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = ResourceKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn names_roundtrip_through_from_str() {
        for kind in ResourceKind::ALL {
            let parsed: ResourceKind = kind.name().parse().expect("name should parse");
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "widgets".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err, ResourceKindParseError("widgets".to_string()));
    }

    #[test]
    fn parent_covers_nested_kinds() {
        assert!(ResourceKind::Inventory.covers(ResourceKind::InventoryLots));
        assert!(ResourceKind::Inventory.covers(ResourceKind::InventorySummary));
        assert!(ResourceKind::Dashboard.covers(ResourceKind::DashboardKpis));
        assert!(!ResourceKind::InventoryLots.covers(ResourceKind::Inventory));
    }

    #[test]
    fn sibling_kinds_do_not_cover_each_other() {
        assert!(!ResourceKind::Documents.covers(ResourceKind::Nonconformances));
        assert!(!ResourceKind::InspectionPlans.covers(ResourceKind::Inspections));
    }

    #[test]
    fn every_kind_covers_itself() {
        for kind in ResourceKind::ALL {
            assert!(kind.covers(*kind));
        }
    }
}
