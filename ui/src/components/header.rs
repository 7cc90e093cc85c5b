//! Header component

use crate::state::AppState;
use leptos::prelude::*;

/// Main application header
#[component]
pub fn Header(
    /// Mobile sidebar toggle
    sidebar_open: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let status = move || match state.backend_online.get() {
        None => ("bg-slate-300", "Connecting..."),
        Some(true) => ("bg-emerald-500", "Backend online"),
        Some(false) => ("bg-red-500 animate-pulse", "Backend unreachable"),
    };

    view! {
        <header class="h-16 sticky top-0 z-40 bg-white border-b border-slate-200">
            <div class="h-full px-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <button
                        on:click=move |_| sidebar_open.update(|v| *v = !*v)
                        class="lg:hidden p-2 rounded-lg hover:bg-slate-100"
                        aria-label="Toggle navigation"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                    <a href="/" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <span class="text-2xl">"\u{2696}\u{fe0f}"</span>
                        <div>
                            <h1 class="text-lg font-bold text-slate-900">"Legal Doc Explainer"</h1>
                            <p class="text-xs text-slate-500 -mt-0.5">"AI contract review"</p>
                        </div>
                    </a>
                </div>

                <div class="flex items-center gap-2 text-xs text-slate-500">
                    <span class=move || format!("w-2 h-2 rounded-full {}", status().0)></span>
                    <span>{move || status().1}</span>
                </div>
            </div>
        </header>
    }
}
