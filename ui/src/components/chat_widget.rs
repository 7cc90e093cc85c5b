//! Floating chat panel shared by every page.
//!
//! Opening and closing go through the chat container; the panel itself only
//! renders [`AppState::chat`].

use crate::components::{ChatInput, ChatMessageView, ErrorBanner, TypingIndicator};
use crate::state::AppState;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = expect_context::<AppState>();
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = move || state.chat.with(|c| c.is_open());
    let loading = Signal::derive(move || state.chat.with(|c| c.loading));
    let has_document = move || state.chat.with(|c| c.document.is_some());
    let document_name = move || {
        state
            .chat
            .with(|c| c.document.as_ref().map(|d| d.name.clone()))
            .unwrap_or_default()
    };

    // Keep the newest entry in view
    Effect::new(move |_| {
        state.chat.with(|c| c.messages.len());
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    // Cleared right away; a rejected question is put back
    let send = move || {
        let question = input.get_untracked();
        let chat = state.chat_store();
        input.set(String::new());
        state.run(async move {
            if !chat.send_message(&question).await && input.get_untracked().is_empty() {
                input.set(question);
            }
        });
    };

    let ask = move |question: String| {
        let chat = state.chat_store();
        state.run(async move {
            chat.select_suggested_question(&question).await;
        });
    };

    view! {
        // Reopen button for a closed chat that still has a document
        <Show when=move || !is_open() && has_document()>
            <button
                class="fixed bottom-6 right-6 z-40 w-14 h-14 rounded-full bg-blue-600 text-white shadow-lg
                       hover:bg-blue-700 flex items-center justify-center text-2xl"
                on:click=move |_| state.chat_store().force_show_chat(None, None)
                aria-label="Open chat"
            >
                "\u{1f4ac}"
            </button>
        </Show>

        <Show when=is_open>
            <div class="fixed bottom-4 right-4 z-50 w-[calc(100%-2rem)] sm:w-96 h-[32rem] bg-white rounded-2xl
                        shadow-2xl border border-slate-200 flex flex-col overflow-hidden">
                <div class="px-4 py-3 bg-blue-600 text-white flex items-center justify-between">
                    <div class="min-w-0">
                        <div class="text-sm font-semibold">"Legal Assistant"</div>
                        <div class="text-xs opacity-80 truncate">{document_name}</div>
                    </div>
                    <div class="flex items-center gap-1">
                        <button
                            class="px-2 py-1 text-xs rounded hover:bg-blue-700"
                            on:click=move |_| state.chat_store().clear_messages()
                        >
                            "Clear"
                        </button>
                        <button
                            class="px-2 py-1 text-lg leading-none rounded hover:bg-blue-700"
                            on:click=move |_| state.chat_store().close_chat()
                            aria-label="Close chat"
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto p-3 space-y-3">
                    <ErrorBanner
                        error=Signal::derive(move || state.chat.with(|c| c.error.clone()))
                        on_dismiss=move || state.chat_store().clear_error()
                    />
                    <For
                        each=move || state.chat.with(|c| c.messages.clone())
                        key=|m| m.id.clone()
                        children=|m| view! { <ChatMessageView message=m /> }
                    />
                    <Show when=move || loading.get()>
                        <TypingIndicator />
                    </Show>
                    <div node_ref=messages_end_ref></div>
                </div>

                <Show when=move || state.chat.with(|c| !c.suggested_questions.is_empty() && !c.loading)>
                    <div class="px-3 pt-2 flex flex-wrap gap-1 border-t border-slate-100">
                        {move || state.chat.with(|c| c.suggested_questions.clone()).into_iter().map(|q| {
                            let label = q.clone();
                            view! {
                                <button
                                    class="text-xs px-2 py-1 rounded-full bg-slate-100 hover:bg-blue-50 hover:text-blue-700 text-left"
                                    on:click=move |_| ask(q.clone())
                                >
                                    {label}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </Show>

                <ChatInput value=input on_submit=send disabled=loading />
            </div>
        </Show>
    }
}
