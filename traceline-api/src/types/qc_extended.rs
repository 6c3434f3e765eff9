//! Extended QC register types.

use super::ApiDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to log a leak test (`POST /api/qc-extended/leak-tests`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeakTestRequest {
    pub test_date: NaiveDate,
    pub worker_name: Option<String>,
    pub batch_no: Option<String>,
    pub qty_testing: Option<f64>,
    pub qty_leak_sets: Option<f64>,
    pub qty_ok_sets: Option<f64>,
    pub sample_count: Option<i64>,
    pub result: Option<String>,
}

/// Leak test register row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakTestResponse {
    pub id: String,
    pub sr_no: Option<i64>,
    pub test_date: NaiveDate,
    pub worker_name: Option<String>,
    pub batch_no: Option<String>,
    pub qty_testing: Option<f64>,
    pub qty_leak_sets: Option<f64>,
    pub qty_ok_sets: Option<f64>,
    pub sample_count: Option<i64>,
    pub result: Option<String>,
    pub created_at: ApiDateTime,
}

/// Request to log a thermometer calibration
/// (`POST /api/qc-extended/calibrations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCalibrationRequest {
    pub calibration_date: NaiveDate,
    pub sterility_room_temp: Option<f64>,
    pub standard_thermometer_temp: Option<f64>,
    pub result: Option<String>,
}

/// Thermometer calibration register row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResponse {
    pub id: String,
    pub sr_no: Option<i64>,
    pub calibration_date: NaiveDate,
    pub sterility_room_temp: Option<f64>,
    pub standard_thermometer_temp: Option<f64>,
    pub result: Option<String>,
    pub created_at: ApiDateTime,
}

/// Fumigation register row (`GET /api/qc-extended/fumigation-records`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FumigationRecordResponse {
    pub id: String,
    pub sr_no: Option<i64>,
    pub fumigation_date: NaiveDate,
    pub area: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub done_by: Option<String>,
    pub remarks: Option<String>,
    pub created_at: ApiDateTime,
}

/// Distilled water test register row
/// (`GET /api/qc-extended/distilled-water-tests`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistilledWaterTestResponse {
    pub id: String,
    pub sr_no: Option<i64>,
    pub test_date: NaiveDate,
    pub month: Option<String>,
    pub clarity: Option<String>,
    pub ph_value: Option<f64>,
    pub chloride: Option<String>,
    pub sulphate: Option<String>,
    pub heavy_metals: Option<String>,
    pub residue: Option<String>,
    pub result: Option<String>,
    pub created_at: ApiDateTime,
}
