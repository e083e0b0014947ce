//! Read-only log of each user's most recent attendance.

use crate::app_lib::{Outcome, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner, ToastContext, use_toasts};
use crate::features::{
    attendance::{
        loader::{FETCH_FAILED, HttpRecordsApi, RecordsState, RecordsView, load_records},
        types::AttendanceRecord,
    },
    auth::{RequireAuth, state::use_session},
};
use leptos::{prelude::*, task::spawn_local};

/// Records state owned by the mounted table. Writes fail once it is disposed.
#[derive(Clone, Copy)]
struct SignalRecordsView {
    state: RwSignal<RecordsState>,
    toasts: ToastContext,
}

impl RecordsView for SignalRecordsView {
    fn try_set(&self, state: RecordsState) -> Option<()> {
        self.state.try_update(|slot| *slot = state)
    }

    fn notify(&self, outcome: Outcome) {
        self.toasts.show(outcome);
    }
}

#[component]
pub fn AttendanceRecordsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <RecordsTable />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn RecordsTable() -> impl IntoView {
    let session = use_session();
    let view = SignalRecordsView {
        state: RwSignal::new(RecordsState::Loading),
        toasts: use_toasts(),
    };
    let state = view.state;
    let api = HttpRecordsApi::new(session.access_token());

    spawn_local(async move {
        let _ = load_records(&api, &view).await;
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Attendance Records"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "View all attendance records tracked by the system."
                </p>
            </div>
            <div class=format!("{} overflow-x-auto", Theme::CARD)>
                {move || match state.get() {
                    RecordsState::Loaded(list) if list.is_empty() => view! {
                        <div class="p-6">
                            <Alert kind=AlertKind::Info message="No attendance has been recorded yet." />
                        </div>
                    }.into_any(),
                    RecordsState::Loaded(list) => view! { <RecordRows records=list /> }.into_any(),
                    RecordsState::Failed => view! {
                        <div class="p-6">
                            <Alert kind=AlertKind::Error message=FETCH_FAILED />
                        </div>
                    }.into_any(),
                    RecordsState::Loading => view! { <Spinner /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn RecordRows(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
            <thead class="bg-gray-50 dark:bg-gray-900/50">
                <tr>
                    <th scope="col" class=Theme::TH>"ID"</th>
                    <th scope="col" class=Theme::TH>"Name"</th>
                    <th scope="col" class=Theme::TH>"Email"</th>
                    <th scope="col" class=Theme::TH>"Last Attendance Date"</th>
                    <th scope="col" class=Theme::TH>"Last Attendance Time"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                {records
                    .into_iter()
                    .map(|record| {
                        let date = record.date_label();
                        let time = record.time_label();
                        view! {
                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                <td class=Theme::TD>{record.id}</td>
                                <td class=Theme::TD>{record.name}</td>
                                <td class=Theme::TD>{record.email}</td>
                                <td class=Theme::TD>{date}</td>
                                <td class=Theme::TD>{time}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
