//! Dashboard: headline figures, recent documents and the upload entry point.

use crate::components::{DocumentCard, EmptyState, ErrorBanner, Skeleton, UploadModal};
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::Title;
use lexplain::views::{format_percentage, quick_stats, recent_documents};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let upload_open = RwSignal::new(false);

    let stats = Memo::new(move |_| state.documents.with(|d| quick_stats(&d.documents)));
    let recent = move || state.documents.with(|d| recent_documents(&d.documents, RECENT_LIMIT));
    let loading = move || state.documents.with(|d| d.loading && d.documents.is_empty());

    let on_delete = Callback::new(move |id: String| {
        let documents = state.documents_store();
        state.run(async move {
            documents.delete_document(&id).await;
        });
    });

    view! {
        <div class="max-w-6xl mx-auto space-y-8">
            <Title text="Dashboard" />

            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Dashboard"</h1>
                    <p class="text-sm text-slate-500">"Upload a contract to get a plain-language analysis."</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                    on:click=move |_| upload_open.set(true)
                >
                    "Upload Document"
                </button>
            </div>

            <ErrorBanner
                error=Signal::derive(move || state.documents.with(|d| d.error.clone()))
                on_dismiss=move || state.documents_store().clear_error()
            />

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard label="Total Documents" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard label="High Risk" value=Signal::derive(move || stats.get().high_risk.to_string()) />
                <StatCard
                    label="Average Risk"
                    value=Signal::derive(move || format_percentage(stats.get().average_risk))
                />
                <StatCard
                    label="Need a Lawyer"
                    value=Signal::derive(move || stats.get().requiring_lawyer.to_string())
                />
            </div>

            <section>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Recent Documents"</h2>
                    <a href="/documents" class="text-sm text-blue-600 hover:underline">"View all"</a>
                </div>
                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            <Skeleton class="h-40 w-full" />
                            <Skeleton class="h-40 w-full" />
                            <Skeleton class="h-40 w-full" />
                        </div>
                    }
                >
                    <Show
                        when=move || state.documents.with(|d| !d.documents.is_empty())
                        fallback=move || view! {
                            <EmptyState
                                icon="\u{1f4c2}"
                                title="No documents yet"
                                description="Upload your first contract to see its risks, key clauses and red flags."
                            >
                                <button
                                    class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm"
                                    on:click=move |_| upload_open.set(true)
                                >
                                    "Upload Document"
                                </button>
                            </EmptyState>
                        }
                    >
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            <For
                                each=recent
                                key=|d| d.id.clone()
                                children=move |d| view! { <DocumentCard document=d on_delete=on_delete /> }
                            />
                        </div>
                    </Show>
                </Show>
            </section>

            <UploadModal open=upload_open />
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-slate-200 p-4">
            <div class="text-xs uppercase tracking-wide text-slate-500">{label}</div>
            <div class="text-2xl font-bold mt-1">{move || value.get()}</div>
        </div>
    }
}
