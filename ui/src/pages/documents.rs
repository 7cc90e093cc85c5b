//! Document list with search, risk filter, sorting and density toggle.

use crate::components::{ConfirmModal, DocumentCard, DocumentRow, EmptyState, ErrorBanner, LoadingSpinner, UploadModal};
use crate::state::AppState;
use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_meta::Title;
use lexplain::views::{Debouncer, DocumentQuery, RiskFilter, SortField, SortOrder, ViewMode};
use lexplain::RiskLevel;

const SORT_FIELDS: [SortField; 4] = [
    SortField::CreatedAt,
    SortField::Filename,
    SortField::RiskScore,
    SortField::Confidence,
];

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let search_input = RwSignal::new(String::new());
    let query = RwSignal::new(DocumentQuery::default());
    let view_mode = RwSignal::new(ViewMode::Grid);
    let pending_delete = RwSignal::new(Option::<(String, String)>::None);
    let upload_open = RwSignal::new(false);
    let debouncer = StoredValue::new(Debouncer::<String>::new(state.search_debounce()));

    Effect::new(move |_| {
        let documents = state.documents_store();
        state.run(async move { documents.fetch_documents().await });
    });

    let on_search = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        search_input.set(value.clone());

        let Some(ticket) = debouncer.try_update_value(|d| d.push(value, Utc::now())) else {
            return;
        };
        let delay_ms = debouncer.with_value(|d| d.delay().as_millis() as u32);
        state.run(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(Some(search)) = debouncer.try_update_value(|d| d.fire(ticket, Utc::now())) {
                query.update(|q| q.search = search);
            }
        });
    };

    let filtered = Memo::new(move |_| {
        let q = query.get();
        state.documents.with(|d| q.apply(&d.documents))
    });

    let on_delete = Callback::new(move |id: String| {
        let name = state.documents.with(|d| {
            d.documents
                .iter()
                .find(|doc| doc.id == id)
                .map(|doc| doc.filename.clone())
                .unwrap_or_else(|| id.clone())
        });
        pending_delete.set(Some((id, name)));
    });

    let confirm_delete = move || {
        if let Some((id, _)) = pending_delete.get_untracked() {
            let documents = state.documents_store();
            state.run(async move {
                documents.delete_document(&id).await;
            });
        }
        pending_delete.set(None);
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <Title text="Documents" />

            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Documents"</h1>
                    <p class="text-sm text-slate-500">
                        {move || {
                            let shown = filtered.with(Vec::len);
                            let total = state.documents.with(|d| d.total_count);
                            format!("{} of {} documents", shown, total)
                        }}
                    </p>
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

            // Controls
            <div class="bg-white rounded-xl border border-slate-200 p-4 flex flex-wrap gap-3 items-center">
                <input
                    type="search"
                    placeholder="Search by name, summary or type..."
                    class="flex-1 min-w-[200px] px-3 py-2 border border-slate-300 rounded-lg text-sm"
                    prop:value=move || search_input.get()
                    on:input=on_search
                />
                <select
                    class="px-3 py-2 border border-slate-300 rounded-lg text-sm"
                    prop:value=move || query.with(|q| q.risk.as_str())
                    on:change=move |ev| {
                        let risk = RiskFilter::parse(&event_target_value(&ev));
                        query.update(|q| q.risk = risk);
                    }
                >
                    <option value="all">"All risk levels"</option>
                    {RiskLevel::ALL.into_iter().map(|level| view! {
                        <option value=level.as_str()>{level.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <div class="flex gap-1">
                    {SORT_FIELDS.into_iter().map(|field| view! {
                        <button
                            class=move || format!(
                                "px-3 py-2 rounded-lg text-sm border {}",
                                if query.with(|q| q.sort_field == field) { "border-blue-500 text-blue-700 bg-blue-50" } else { "border-slate-300 text-slate-600" }
                            )
                            on:click=move |_| query.update(|q| q.toggle_sort(field))
                        >
                            {field.label()}
                            {move || query.with(|q| (q.sort_field == field).then(|| match q.sort_order {
                                SortOrder::Asc => " \u{2191}",
                                SortOrder::Desc => " \u{2193}",
                            }))}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="flex gap-1 ml-auto">
                    <button
                        class=move || density_class(view_mode.get() == ViewMode::Grid)
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class=move || density_class(view_mode.get() == ViewMode::List)
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                </div>
            </div>

            <Show when=move || state.documents.with(|d| d.loading)>
                <div class="flex justify-center py-4"><LoadingSpinner size="w-8 h-8" /></div>
            </Show>

            {move || {
                if filtered.with(Vec::is_empty) {
                    if query.with(DocumentQuery::is_filtered) {
                        view! {
                            <EmptyState
                                icon="\u{1f50d}"
                                title="No matching documents"
                                description="Try a different search term or risk level."
                            />
                        }.into_any()
                    } else {
                        view! {
                            <EmptyState
                                icon="\u{1f4c2}"
                                title="No documents yet"
                                description="Uploaded contracts will appear here."
                            />
                        }.into_any()
                    }
                } else if view_mode.get() == ViewMode::Grid {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            <For
                                each=move || filtered.get()
                                key=|d| d.id.clone()
                                children=move |d| view! { <DocumentCard document=d on_delete=on_delete /> }
                            />
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="bg-white rounded-xl border border-slate-200 overflow-x-auto">
                            <table class="w-full text-left">
                                <thead class="text-xs uppercase text-slate-500 border-b border-slate-200">
                                    <tr>
                                        <th class="py-2 px-4">"Name"</th>
                                        <th class="py-2 px-4">"Type"</th>
                                        <th class="py-2 px-4">"Risk"</th>
                                        <th class="py-2 px-4">"Confidence"</th>
                                        <th class="py-2 px-4">"Uploaded"</th>
                                        <th class="py-2 px-4"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered.get()
                                        key=|d| d.id.clone()
                                        children=move |d| view! { <DocumentRow document=d on_delete=on_delete /> }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}

            {move || pending_delete.get().map(|(_, name)| view! {
                <ConfirmModal
                    title="Delete document"
                    message=format!("Delete \"{}\"? Its analysis will be removed permanently.", name)
                    confirm_label="Delete"
                    on_confirm=confirm_delete
                    on_cancel=move || pending_delete.set(None)
                />
            })}

            <UploadModal open=upload_open />
        </div>
    }
}

fn density_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-lg text-sm bg-slate-800 text-white"
    } else {
        "px-3 py-2 rounded-lg text-sm border border-slate-300 text-slate-600"
    }
}
