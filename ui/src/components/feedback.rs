//! Error banners and empty states.

use leptos::prelude::*;

/// Dismissable error message. Renders nothing while `error` is `None`.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<String>>,
    on_dismiss: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let on_dismiss = StoredValue::new(on_dismiss);
    move || {
        error.get().map(|message| {
            view! {
                <div class="mb-4 p-3 rounded-lg bg-red-50 border border-red-200 text-red-800 flex items-start justify-between gap-4">
                    <p class="text-sm">{message}</p>
                    <button
                        class="text-red-600 hover:text-red-800 text-sm font-medium"
                        on:click=move |_| on_dismiss.with_value(|f| f())
                    >
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}

#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center text-center py-16">
            <span class="text-5xl mb-4">{icon}</span>
            <h3 class="text-lg font-semibold text-slate-800">{title}</h3>
            <p class="text-sm text-slate-500 mt-1 max-w-md">{description}</p>
            <div class="mt-6">{children.map(|c| c())}</div>
        </div>
    }
}
