//! API Request and Response Types
//!
//! One module per backend domain, re-exported flat. Shapes mirror the
//! backend's pydantic schemas; statuses and type tags stay as strings on the
//! wire because the server treats them as free-form labels.
//!
//! The backend serializes datetimes without a timezone offset (naive UTC), so
//! wire timestamps are `NaiveDateTime` rather than `DateTime<Utc>`.

use chrono::NaiveDateTime;

/// Timestamp as emitted by the backend: naive, implicitly UTC.
pub type ApiDateTime = NaiveDateTime;

// Auth types
mod auth;
pub use auth::*;

// User and role types
mod user;
pub use user::*;

// Document control types
mod document;
pub use document::*;

// Quality types: nonconformances, CAPAs, audits
mod quality;
pub use quality::*;

// Manufacturing types: items, work orders, QC inspections
mod manufacturing;
pub use manufacturing::*;

// Inventory and lot tracking types
mod inventory;
pub use inventory::*;

// Training matrix and records
mod training;
pub use training::*;

// HR types
mod hr;
pub use hr::*;

// Maintenance types
mod maintenance;
pub use maintenance::*;

// Marketing types
mod marketing;
pub use marketing::*;

// Purchase types
mod purchase;
pub use purchase::*;

// Store types
mod store;
pub use store::*;

// Management review types
mod mr;
pub use mr::*;

// Extended QC registers
mod qc_extended;
pub use qc_extended::*;

// Dashboard types
mod dashboard;
pub use dashboard::*;

// Shared response shapes
mod common;
pub use common::*;
