//! Persistent page frame: header, sidebar and the floating chat widget.

use crate::components::{ChatWidget, Header, Sidebar};
use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();
    let sidebar_open = RwSignal::new(false);

    // Probe the backend once, and load the list the sidebar counts from.
    Effect::new(move |_| {
        state.check_backend();
        let documents = state.documents_store();
        state.run(async move { documents.fetch_documents().await });
    });

    view! {
        <div class="h-screen flex flex-col bg-slate-50 text-slate-900">
            <Header sidebar_open=sidebar_open />
            <div class="flex-1 flex overflow-hidden">
                <Sidebar is_open=sidebar_open />
                <main class="flex-1 overflow-y-auto px-4 py-6 lg:px-8">
                    {children()}
                </main>
            </div>
            <ChatWidget />
        </div>
    }
}
