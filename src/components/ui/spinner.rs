use leptos::prelude::*;

/// Loading indicator, optionally followed by a short caption.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-6">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label=label.unwrap_or("Loading")
            ></div>
            {label.map(|text| view! { <span class="text-sm text-gray-500 dark:text-gray-400">{text}</span> })}
        </div>
    }
}
