//! Extended QC register endpoints under `/api/qc-extended`.

use crate::error::ClientError;
use crate::rest::RestClient;
use traceline_api::types::{
    CalibrationResponse, CreateCalibrationRequest, CreateLeakTestRequest,
    DistilledWaterTestResponse, FumigationRecordResponse, LeakTestResponse,
};

impl RestClient {
    /// `GET /api/qc-extended/leak-tests`
    pub async fn list_leak_tests(&self) -> Result<Vec<LeakTestResponse>, ClientError> {
        self.get_json::<Vec<LeakTestResponse>, ()>("/api/qc-extended/leak-tests", None)
            .await
    }

    /// `POST /api/qc-extended/leak-tests`
    pub async fn create_leak_test(
        &self,
        req: &CreateLeakTestRequest,
    ) -> Result<LeakTestResponse, ClientError> {
        self.post_json("/api/qc-extended/leak-tests", req).await
    }

    /// `GET /api/qc-extended/calibrations`
    pub async fn list_calibrations(&self) -> Result<Vec<CalibrationResponse>, ClientError> {
        self.get_json::<Vec<CalibrationResponse>, ()>("/api/qc-extended/calibrations", None)
            .await
    }

    /// `POST /api/qc-extended/calibrations`
    pub async fn create_calibration(
        &self,
        req: &CreateCalibrationRequest,
    ) -> Result<CalibrationResponse, ClientError> {
        self.post_json("/api/qc-extended/calibrations", req).await
    }

    /// `GET /api/qc-extended/fumigation-records`
    pub async fn list_fumigation_records(
        &self,
    ) -> Result<Vec<FumigationRecordResponse>, ClientError> {
        self.get_json::<Vec<FumigationRecordResponse>, ()>(
            "/api/qc-extended/fumigation-records",
            None,
        )
        .await
    }

    /// `GET /api/qc-extended/distilled-water-tests`
    pub async fn list_distilled_water_tests(
        &self,
    ) -> Result<Vec<DistilledWaterTestResponse>, ClientError> {
        self.get_json::<Vec<DistilledWaterTestResponse>, ()>(
            "/api/qc-extended/distilled-water-tests",
            None,
        )
        .await
    }
}
