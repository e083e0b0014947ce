use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Most recent attendance of one user. Users who never attended are not listed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub last_attendance_date: NaiveDate,
    pub last_attendance_time: NaiveTime,
}

impl AttendanceRecord {
    pub fn date_label(&self) -> String {
        self.last_attendance_date.format("%Y-%m-%d").to_string()
    }

    pub fn time_label(&self) -> String {
        self.last_attendance_time.format("%H:%M:%S").to_string()
    }
}
