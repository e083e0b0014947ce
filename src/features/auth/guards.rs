//! Client-side route protection. The guard is a UX gate only: the API still
//! authorizes every protected call, and an expired token passes here until the
//! backend rejects it.

use super::session::Session;

/// Whether a route needs an access token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// Every navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    SignIn,
    Register,
    Attendance,
    RegisteredUsers,
    AttendanceRecords,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Home,
        AppRoute::SignIn,
        AppRoute::Register,
        AppRoute::Attendance,
        AppRoute::RegisteredUsers,
        AppRoute::AttendanceRecords,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::SignIn => "/signin",
            AppRoute::Register => "/register",
            AppRoute::Attendance => "/attendance",
            AppRoute::RegisteredUsers => "/all-registered-users",
            AppRoute::AttendanceRecords => "/attendance-records",
        }
    }

    pub const fn access(self) -> Access {
        match self {
            AppRoute::Register | AppRoute::RegisteredUsers | AppRoute::AttendanceRecords => {
                Access::Protected
            }
            AppRoute::Home | AppRoute::SignIn | AppRoute::Attendance => Access::Public,
        }
    }

    /// Matches a location path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
    }

    /// Whether `path` still points at this route. Delayed redirects check
    /// this so they do not pull the user back from a view they moved to.
    pub fn is_current(self, path: &str) -> bool {
        Self::from_path(path) == Some(self)
    }
}

/// What the router should do for a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// A protected view is allowed iff the session holds a non-empty access token.
/// Expiry is not checked.
pub fn is_allowed(session: &Session) -> bool {
    session.access_token().is_some()
}

/// Decides a navigation. Unknown paths go home; protected routes without a
/// token go to sign-in. Nothing is cached between calls.
pub fn resolve(path: &str, session: &Session) -> RouteDecision {
    match AppRoute::from_path(path) {
        None => RouteDecision::Redirect(AppRoute::Home),
        Some(route) if route.access() == Access::Protected && !is_allowed(session) => {
            RouteDecision::Redirect(AppRoute::SignIn)
        }
        Some(route) => RouteDecision::Render(route),
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::RequireAuth;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{AppRoute, RouteDecision, resolve};
    use crate::features::auth::state::use_session;
    use leptos::prelude::*;
    use leptos_router::{components::Redirect, hooks::use_location};

    /// Renders `children` while the current path resolves to a render,
    /// otherwise redirects where the guard points. Re-evaluated whenever the
    /// session signal or the location changes.
    #[component]
    pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
        let auth = use_session();
        let location = use_location();
        let decision = Memo::new(move |_| {
            let path = location.pathname.get();
            auth.session.with(|session| resolve(&path, session))
        });
        let target = move || match decision.get() {
            RouteDecision::Redirect(route) => route.path(),
            RouteDecision::Render(_) => AppRoute::SignIn.path(),
        };

        view! {
            <Show
                when=move || matches!(decision.get(), RouteDecision::Render(_))
                fallback=move || view! { <Redirect path=target() /> }
            >
                {children()}
            </Show>
        }
    }
}
