//! Sidebar component

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str, &str); 3] = [
    ("/", "\u{1f3e0}", "Dashboard"),
    ("/documents", "\u{1f4c4}", "Documents"),
    ("/analytics", "\u{1f4ca}", "Analytics"),
];

/// Sidebar with navigation and collection counts
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let pathname = use_location().pathname;

    let is_active = move |href: &str| {
        let current = pathname.get();
        if href == "/" {
            current == "/"
        } else {
            current.starts_with(href)
        }
    };

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/40 z-30 lg:hidden"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "fixed lg:relative inset-y-0 left-0 z-40 w-64 bg-white border-r border-slate-200
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <nav class="flex-1 p-4 space-y-1">
                {NAV_ITEMS.into_iter().map(|(href, icon, label)| view! {
                    <a
                        href=href
                        on:click=move |_| is_open.set(false)
                        class=move || format!(
                            "flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors {}",
                            if is_active(href) { "bg-blue-50 text-blue-700" } else { "text-slate-600 hover:bg-slate-100" }
                        )
                    >
                        <span class="text-lg">{icon}</span>
                        {label}
                    </a>
                }).collect::<Vec<_>>()}
            </nav>

            <div class="p-4 border-t border-slate-200 text-xs text-slate-500 space-y-1">
                <div class="flex justify-between">
                    <span>"Documents"</span>
                    <span class="font-medium text-slate-700">
                        {move || state.documents.with(|d| d.total_count)}
                    </span>
                </div>
                <div class="text-center pt-2">"Legal Doc Explainer v8.0.0"</div>
            </div>
        </aside>
    }
}
