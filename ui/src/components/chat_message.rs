//! Chat message component

use leptos::prelude::*;
use lexplain::types::{ChatMessage, MessageRole};
use lexplain::views::format_percentage;

/// Render a single transcript entry
#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let sections = message.relevant_sections.join(", ");
    let implications = message
        .legal_implications
        .clone()
        .filter(|text| !text.trim().is_empty());

    view! {
        <div class=format!(
            "flex items-start gap-2 {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            // Avatar
            <div class=format!(
                "w-7 h-7 rounded-full flex items-center justify-center text-white text-xs shrink-0 {}",
                if is_user { "bg-slate-500" } else { "bg-blue-600" }
            )>
                {if is_user { "You" } else { "AI" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[85%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                // Message bubble
                <div class=format!(
                    "px-3 py-2 rounded-2xl text-sm whitespace-pre-wrap break-words {}",
                    if is_user {
                        "bg-blue-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-100 text-slate-800 rounded-tl-sm"
                    }
                )>
                    {message.content.clone()}
                </div>

                {implications.map(|text| view! {
                    <div class="text-xs bg-amber-50 border border-amber-200 text-amber-800 rounded-lg px-3 py-2">
                        <span class="font-medium">"Legal implications: "</span>
                        {text}
                    </div>
                })}

                {(!sections.is_empty()).then(|| view! {
                    <span class="text-xs text-slate-500">"Sections: " {sections}</span>
                })}

                <span class="text-xs text-slate-400">
                    {message.timestamp.format("%H:%M").to_string()}
                    {message.confidence_score.map(|c| format!(" \u{00b7} {} confidence", format_percentage(c)))}
                </span>
            </div>
        </div>
    }
}
