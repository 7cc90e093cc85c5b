//! Chat input component

use leptos::prelude::*;
use lexplain::api::chat::MAX_QUESTION_CHARS;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Question box with auto-resize textarea and a character counter
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + Send + Sync + Clone + 'static,
    /// Whether input is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask a question about this document...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Auto-resize textarea
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(120);
            let _ = el.set_attribute("style", &format!("height: {}px; max-height: 120px;", new_height));
        }
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        {
            value.set(textarea.value());
            resize_textarea();
        }
    };

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !disabled.get() && !value.get().trim().is_empty() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = move |_| {
        if !value.get().trim().is_empty() {
            on_submit();
        }
    };

    let count = move || value.with(|v| v.trim().chars().count());

    view! {
        <div class="p-3 border-t border-slate-200 bg-white">
            <div class="flex items-end gap-2">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="flex-1 px-3 py-2 border border-slate-300 rounded-xl resize-none text-sm
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 120px;"
                ></textarea>
                <button
                    on:click=on_button_click
                    disabled=move || disabled.get() || value.with(|v| v.trim().is_empty())
                    class="p-2 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-300
                           disabled:cursor-not-allowed rounded-xl transition-colors"
                    aria-label="Send"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="w-5 h-5 text-white"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <line x1="22" y1="2" x2="11" y2="13"></line>
                        <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                    </svg>
                </button>
            </div>
            <div class=move || format!(
                "text-right text-xs mt-1 {}",
                if count() > MAX_QUESTION_CHARS { "text-red-600" } else { "text-slate-400" }
            )>
                {move || format!("{}/{}", count(), MAX_QUESTION_CHARS)}
            </div>
        </div>
    }
}
