mod attendance;
mod attendance_records;
mod home;
pub(crate) mod paths;
mod register;
mod signin;
mod users;

pub(crate) use attendance::AttendancePage;
pub(crate) use attendance_records::AttendanceRecordsPage;
pub(crate) use home::HomePage;
pub(crate) use register::RegisterPage;
pub(crate) use signin::SignInPage;
pub(crate) use users::UsersListPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Unknown paths land on the home view.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path=paths::HOME /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/signin") view=SignInPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/attendance") view=AttendancePage />
            <Route path=path!("/all-registered-users") view=UsersListPage />
            <Route path=path!("/attendance-records") view=AttendanceRecordsPage />
        </Routes>
    }
}
