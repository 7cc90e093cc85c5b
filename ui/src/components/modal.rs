//! Modal dialogs

use leptos::prelude::*;

#[component]
pub fn Modal(
    title: &'static str,
    on_close: impl Fn() + Send + Sync + 'static,
    children: Children,
) -> impl IntoView {
    let on_close = StoredValue::new(on_close);
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-black/50"
                on:click=move |_| on_close.with_value(|f| f())
            ></div>
            <div class="relative bg-white rounded-xl shadow-xl w-full max-w-lg p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">{title}</h2>
                    <button
                        class="text-slate-400 hover:text-slate-600 text-xl leading-none"
                        on:click=move |_| on_close.with_value(|f| f())
                        aria-label="Close"
                    >
                        "\u{00d7}"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Yes/no confirmation, used before deleting a document.
#[component]
pub fn ConfirmModal(
    title: &'static str,
    message: String,
    confirm_label: &'static str,
    on_confirm: impl Fn() + Send + Sync + 'static,
    on_cancel: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let on_confirm = StoredValue::new(on_confirm);
    let on_cancel = StoredValue::new(on_cancel);
    view! {
        <Modal title=title on_close=move || on_cancel.with_value(|f| f())>
            <p class="text-sm text-slate-600">{message}</p>
            <div class="mt-6 flex justify-end gap-2">
                <button
                    class="px-4 py-2 rounded-lg text-sm border border-slate-300 hover:bg-slate-50"
                    on:click=move |_| on_cancel.with_value(|f| f())
                >
                    "Cancel"
                </button>
                <button
                    class="px-4 py-2 rounded-lg text-sm bg-red-600 text-white hover:bg-red-700"
                    on:click=move |_| on_confirm.with_value(|f| f())
                >
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
