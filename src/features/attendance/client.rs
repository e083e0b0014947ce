//! Client helper for the read-only attendance log.

use crate::{
    app_lib::{AppError, api},
    features::attendance::types::AttendanceRecord,
};

pub const ATTENDANCE_RECORDS_PATH: &str = "/api/features/attendance-records/";

/// Fetches the last attendance of every user who has one.
pub async fn list_records(token: Option<&str>) -> Result<Vec<AttendanceRecord>, AppError> {
    api::get_json(ATTENDANCE_RECORDS_PATH, token).await
}
