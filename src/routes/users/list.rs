//! Registered-users table guarded by the session gate. The list is fetched
//! once on mount and again after every edit or delete.

use super::dialogs::{DeleteDialog, EditDialog};
use crate::app_lib::{Outcome, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner, ToastContext, use_toasts};
use crate::features::{
    auth::{RequireAuth, state::use_session},
    users::{
        client::HttpUsersApi,
        controller::{ListView, ResourceListController, UserList},
        dialog::{ListDialog, PendingMutation},
        pagination::PageSize,
    },
};
use leptos::{prelude::*, task::spawn_local};

/// List state owned by the mounted table. Writes fail once it is disposed.
#[derive(Clone, Copy)]
struct SignalListView {
    list: RwSignal<UserList>,
    toasts: ToastContext,
}

impl ListView for SignalListView {
    fn try_update<R>(&self, f: impl FnOnce(&mut UserList) -> R) -> Option<R> {
        self.list.try_update(f)
    }

    fn notify(&self, outcome: Outcome) {
        self.toasts.show(outcome);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogMode {
    Closed,
    Delete,
    Edit,
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <UsersTable />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let session = use_session();
    let view = SignalListView {
        list: RwSignal::new(UserList {
            loading: true,
            ..UserList::default()
        }),
        toasts: use_toasts(),
    };
    let list = view.list;
    let dialog = RwSignal::new(ListDialog::default());
    let mode = Memo::new(move |_| {
        dialog.with(|dialog| match dialog {
            ListDialog::Closed => DialogMode::Closed,
            ListDialog::ConfirmDelete { .. } => DialogMode::Delete,
            ListDialog::Edit { .. } => DialogMode::Edit,
        })
    });

    let controller = move || ResourceListController::new(HttpUsersApi::new(session.access_token()), view);

    spawn_local(async move {
        let _ = controller().load().await;
    });

    let on_confirm = Callback::new(move |()| {
        let Some(mutation) = dialog.try_update(ListDialog::confirm).flatten() else {
            return;
        };
        spawn_local(async move {
            let controller = controller();
            let _ = match mutation {
                PendingMutation::Delete(id) => controller.remove(id).await,
                PendingMutation::Update(id, patch) => controller.update(id, &patch).await,
            };
        });
    });
    let on_cancel = Callback::new(move |()| dialog.update(ListDialog::cancel));

    let total = move || list.with(|list| list.users.len());

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Registered Users"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Manage all registered users in the system."
                </p>
            </div>

            <div class=format!("{} overflow-x-auto", Theme::CARD)>
                <Show
                    when=move || !list.with(|list| list.loading && list.users.is_empty())
                    fallback=|| view! { <Spinner /> }
                >
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"ID"</th>
                                <th scope="col" class=Theme::TH>"Name"</th>
                                <th scope="col" class=Theme::TH>"Email"</th>
                                <th scope="col" class=Theme::TH>"Gender"</th>
                                <th scope="col" class=Theme::TH>"Date of Birth"</th>
                                <th scope="col" class=format!("{} text-right", Theme::TH)>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <For
                                each=move || list.with(|list| list.visible().to_vec())
                                key=|user| user.id
                                children=move |user| {
                                    let dob = user.dob.format("%Y-%m-%d").to_string();
                                    let for_edit = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                            <td class=Theme::TD>{user.id}</td>
                                            <td class=Theme::TD>{user.name}</td>
                                            <td class=Theme::TD>{user.email}</td>
                                            <td class=Theme::TD>{user.gender}</td>
                                            <td class=Theme::TD>{dob}</td>
                                            <td class=format!("{} text-right space-x-3", Theme::TD)>
                                                <button
                                                    type="button"
                                                    class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                                    on:click=move |_| {
                                                        dialog.update(|dialog| {
                                                            dialog.open_edit(&for_edit);
                                                        })
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                    on:click=move |_| {
                                                        dialog.update(|dialog| {
                                                            dialog.open_delete(&for_delete);
                                                        })
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || total() == 0>
                        <div class="p-6">
                            <Alert kind=AlertKind::Info message="No users registered yet." />
                        </div>
                    </Show>
                </Show>
                <PaginationBar list=list />
            </div>

            {move || match mode.get() {
                DialogMode::Closed => None,
                DialogMode::Delete => Some(
                    view! { <DeleteDialog dialog=dialog on_confirm=on_confirm on_cancel=on_cancel /> }
                        .into_any(),
                ),
                DialogMode::Edit => Some(
                    view! { <EditDialog dialog=dialog on_confirm=on_confirm on_cancel=on_cancel /> }
                        .into_any(),
                ),
            }}
        </div>
    }
}

#[component]
fn PaginationBar(list: RwSignal<UserList>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-end gap-4 px-6 py-3 text-sm text-gray-600 dark:text-gray-300">
            <label class="flex items-center gap-2">
                "Rows per page"
                <select
                    class="rounded-lg border border-gray-300 bg-gray-50 p-1.5 dark:bg-gray-700 dark:border-gray-600"
                    on:change=move |event| {
                        let size = event_target_value(&event)
                            .parse::<usize>()
                            .ok()
                            .and_then(PageSize::from_rows);
                        if let Some(size) = size {
                            list.update(|list| list.window.set_page_size(size));
                        }
                    }
                >
                    {PageSize::ALL
                        .into_iter()
                        .map(|size| {
                            let rows = size.rows();
                            view! {
                                <option
                                    value=rows.to_string()
                                    selected=move || list.with(|list| list.window.page_size() == size)
                                >
                                    {rows}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span>{move || list.with(|list| list.window.range_label(list.users.len()))}</span>
            <button
                type="button"
                class=Theme::BUTTON_SECONDARY
                disabled=move || !list.with(|list| list.window.has_prev())
                on:click=move |_| list.update(|list| list.window.prev())
            >
                "Previous"
            </button>
            <button
                type="button"
                class=Theme::BUTTON_SECONDARY
                disabled=move || !list.with(|list| list.window.has_next(list.users.len()))
                on:click=move |_| list.update(|list| list.window.next(list.users.len()))
            >
                "Next"
            </button>
        </div>
    }
}
