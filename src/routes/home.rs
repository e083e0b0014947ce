use crate::{
    app_lib::theme::Theme, components::AppShell, features::auth::state::use_session,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

struct Tile {
    href: &'static str,
    title: &'static str,
    blurb: &'static str,
    protected: bool,
}

const TILES: [Tile; 4] = [
    Tile {
        href: paths::REGISTER,
        title: "Register",
        blurb: "Enroll a new face with profile details.",
        protected: true,
    },
    Tile {
        href: paths::ATTENDANCE,
        title: "Mark Attendance",
        blurb: "Look into the camera to check in.",
        protected: false,
    },
    Tile {
        href: paths::REGISTERED_USERS,
        title: "Registered Users",
        blurb: "Browse, edit and remove enrolled users.",
        protected: true,
    },
    Tile {
        href: paths::ATTENDANCE_RECORDS,
        title: "Attendance Records",
        blurb: "See when each user last checked in.",
        protected: true,
    },
];

/// Landing view with links to every feature.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    view! {
        <AppShell>
            <div class="space-y-8 max-w-4xl mx-auto">
                <div class="space-y-1 text-center">
                    <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                        "Facial Recognition Attendance"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Register faces once, then mark attendance with a glance."
                    </p>
                </div>

                <Show when=move || !is_authenticated.get()>
                    <p class="text-center text-sm text-gray-600 dark:text-gray-300">
                        <A href=paths::SIGN_IN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                            "Sign in"
                        </A>
                        " to register users and review records."
                    </p>
                </Show>

                <div class="grid gap-4 sm:grid-cols-2">
                    {TILES
                        .iter()
                        .map(|tile| {
                            let protected = tile.protected;
                            view! {
                                <A href=tile.href {..} class=format!("{} block p-6 hover:shadow-md transition-shadow", Theme::CARD)>
                                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{tile.title}</h2>
                                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{tile.blurb}</p>
                                    <Show when=move || protected && !is_authenticated.get()>
                                        <p class="mt-2 text-xs text-amber-600 dark:text-amber-400">"Requires sign-in"</p>
                                    </Show>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AppShell>
    }
}
