//! Delete confirmation and edit form for the users table. Both read and write
//! the shared `ListDialog`; the table decides what a confirmation sends.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, ConfirmDialog};
use crate::features::{
    capture::registration::Gender,
    users::{dialog::ListDialog, types::UserDraft},
};
use leptos::prelude::*;

#[component]
pub fn DeleteDialog(
    dialog: RwSignal<ListDialog>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = dialog.with_untracked(|dialog| match dialog {
        ListDialog::ConfirmDelete { name, .. } => name.clone(),
        _ => String::new(),
    });

    view! {
        <ConfirmDialog title="Confirm Delete" on_close=on_cancel>
            <p class="text-sm text-gray-700 dark:text-gray-300">
                {format!("Are you sure you want to delete {name}? This action cannot be undone.")}
            </p>
            <div class="pt-2 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="button" class=Theme::BUTTON_DANGER on:click=move |_| on_confirm.run(())>
                    "Delete"
                </button>
            </div>
        </ConfirmDialog>
    }
}

#[component]
pub fn EditDialog(
    dialog: RwSignal<ListDialog>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = dialog.with_untracked(|dialog| match dialog {
        ListDialog::Edit { draft, .. } => draft.clone(),
        _ => UserDraft::default(),
    });
    let edit = move |apply: fn(&mut UserDraft, String), value: String| {
        dialog.update(|dialog| {
            if let Some(draft) = dialog.draft_mut() {
                apply(draft, value);
            }
        });
    };
    let error = move || dialog.with(|dialog| dialog.error().map(ToString::to_string));

    view! {
        <ConfirmDialog title="Edit User" on_close=on_cancel>
            <form
                class="space-y-4"
                on:submit=move |event| {
                    event.prevent_default();
                    on_confirm.run(());
                }
            >
                <div>
                    <label class=Theme::LABEL for="edit-name">"Name"</label>
                    <input
                        id="edit-name"
                        type="text"
                        class=Theme::INPUT
                        prop:value=initial.name.clone()
                        on:input=move |event| edit(|draft, value| draft.name = value, event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="edit-email">"Email"</label>
                    <input
                        id="edit-email"
                        type="email"
                        class=Theme::INPUT
                        prop:value=initial.email.clone()
                        on:input=move |event| edit(|draft, value| draft.email = value, event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="edit-gender">"Gender"</label>
                    <select
                        id="edit-gender"
                        class=Theme::INPUT
                        on:change=move |event| edit(|draft, value| draft.gender = value, event_target_value(&event))
                    >
                        {Gender::ALL
                            .into_iter()
                            .map(|gender| {
                                let selected = initial.gender == gender.as_str();
                                view! {
                                    <option value=gender.as_str() selected=selected>
                                        {gender.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=Theme::LABEL for="edit-dob">"Date of birth"</label>
                    <input
                        id="edit-dob"
                        type="date"
                        class=Theme::INPUT
                        prop:value=initial.dob.clone()
                        on:input=move |event| edit(|draft, value| draft.dob = value, event_target_value(&event))
                    />
                </div>
                {move || error().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                <div class="pt-2 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </ConfirmDialog>
    }
}
