//! Link targets, taken from the route table so views and guards agree.

use crate::features::auth::guards::AppRoute;

pub const HOME: &str = AppRoute::Home.path();
pub const SIGN_IN: &str = AppRoute::SignIn.path();
pub const REGISTER: &str = AppRoute::Register.path();
pub const ATTENDANCE: &str = AppRoute::Attendance.path();
pub const REGISTERED_USERS: &str = AppRoute::RegisteredUsers.path();
pub const ATTENDANCE_RECORDS: &str = AppRoute::AttendanceRecords.path();
