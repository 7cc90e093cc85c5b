//! Lexplain web client
//!
//! Upload contracts, read the analysis, chat about a document and look at
//! collection analytics. All logic lives in the `lexplain` crate; this crate
//! renders it.

pub mod components;
pub mod download;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use components::Layout;
use pages::{
    analytics::AnalyticsPage, dashboard::DashboardPage, document_view::DocumentViewPage,
    documents::DocumentsPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to start client: {}", e);
            return view! { <StartupError message=e.message() /> }.into_any();
        }
    };
    provide_context(app_state);

    view! {
        <Title formatter=|page: String| format!("{} | Legal Doc Explainer", page) />
        <Router>
            <Layout>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/documents") view=DocumentsPage />
                    <Route path=path!("/documents/:id") view=DocumentViewPage />
                    <Route path=path!("/analytics") view=AnalyticsPage />
                </Routes>
            </Layout>
        </Router>
    }
    .into_any()
}

#[component]
fn StartupError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center max-w-md">
                <h1 class="text-2xl font-bold text-red-600 mb-4">"Configuration error"</h1>
                <p class="text-slate-600">{message}</p>
            </div>
        </div>
    }
}
