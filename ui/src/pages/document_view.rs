//! Analysis of one document: overview, risk breakdown and clauses, plus PDF
//! export and the chat entry point.

use crate::components::{
    ConfidenceBadge, EmptyState, ErrorBanner, LoadingSpinner, RiskBadge, RiskMeter, UrgencyCallout,
};
use crate::download::save_report;
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use lexplain::types::DocumentDetail;
use lexplain::views::format::{overall_risk, RISK_CATEGORIES};
use lexplain::views::format_percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Risk,
    Clauses,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Risk, Tab::Clauses];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Risk => "Risk Analysis",
            Tab::Clauses => "Key Clauses",
        }
    }
}

#[component]
pub fn DocumentViewPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let tab = RwSignal::new(Tab::Overview);
    let exporting = RwSignal::new(false);
    let export_error = RwSignal::new(Option::<String>::None);

    let document_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    // Fetch on entry and whenever the id changes
    Effect::new(move |_| {
        let id = document_id.get();
        if id.is_empty() {
            return;
        }
        tab.set(Tab::Overview);
        let documents = state.documents_store();
        state.run(async move { documents.fetch_document(&id).await });
    });

    // Detail is discarded on navigation away
    on_cleanup(move || state.documents_store().clear_current_document());

    let current = move || {
        let id = document_id.get();
        state
            .documents
            .with(|d| d.current_document.clone().filter(|doc| doc.id == id))
    };

    let export = move |_| {
        let id = document_id.get_untracked();
        let service = state.context().document_service;
        exporting.set(true);
        export_error.set(None);
        state.run(async move {
            match service.export_report(&id).await {
                Ok(report) => {
                    if let Err(e) = save_report(&report) {
                        tracing::error!("download failed: {:?}", e);
                        export_error.set(Some("Could not start the download".to_string()));
                    }
                }
                Err(e) => export_error.set(Some(e.message())),
            }
            exporting.set(false);
        });
    };

    let open_chat = move |doc: &DocumentDetail| {
        let chat = state.chat_store();
        let (id, name) = (doc.id.clone(), doc.filename.clone());
        state.run(async move { chat.open_chat(&id, &name).await });
    };

    view! {
        <div class="max-w-5xl mx-auto space-y-6">
            <Title text=move || state.documents.with(|d| d.current_document.as_ref().map(|doc| doc.filename.clone())).unwrap_or_else(|| "Document".to_string()) />

            <a href="/documents" class="text-sm text-blue-600 hover:underline">"\u{2190} All documents"</a>

            <ErrorBanner
                error=Signal::derive(move || export_error.get().or_else(|| state.documents.with(|d| d.error.clone())))
                on_dismiss=move || {
                    export_error.set(None);
                    state.documents_store().clear_error();
                }
            />

            {move || match current() {
                None if state.documents.with(|d| d.loading) => view! {
                    <div class="flex justify-center py-16"><LoadingSpinner size="w-10 h-10" /></div>
                }.into_any(),
                None => view! {
                    <EmptyState
                        icon="\u{1f4c4}"
                        title="Document not available"
                        description="It may have been deleted, or the analysis service could not be reached."
                    />
                }.into_any(),
                Some(doc) => {
                    let chat_doc = doc.clone();
                    let tab_doc = doc.clone();
                    view! {
                        <div class="bg-white rounded-xl border border-slate-200 p-6">
                            <div class="flex flex-wrap items-start justify-between gap-4">
                                <div class="min-w-0">
                                    <h1 class="text-2xl font-bold truncate">{doc.filename.clone()}</h1>
                                    <p class="text-sm text-slate-500 mt-1">
                                        {doc.document_type.label()}
                                        " \u{00b7} "
                                        {format!("{} min read", doc.estimated_reading_time)}
                                    </p>
                                    <div class="mt-2 flex items-center gap-3">
                                        <RiskBadge score=doc.risk_score />
                                        <ConfidenceBadge score=doc.confidence_score />
                                    </div>
                                </div>
                                <div class="flex gap-2">
                                    <button
                                        class="px-4 py-2 rounded-lg border border-slate-300 text-sm hover:bg-slate-50 disabled:opacity-50"
                                        disabled=move || exporting.get()
                                        on:click=export
                                    >
                                        {move || if exporting.get() { "Exporting..." } else { "Export PDF" }}
                                    </button>
                                    <button
                                        class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm hover:bg-blue-700"
                                        on:click=move |_| open_chat(&chat_doc)
                                    >
                                        "Ask Questions"
                                    </button>
                                </div>
                            </div>
                            <div class="mt-6">
                                <RiskMeter score=doc.risk_score />
                            </div>
                        </div>

                        <div class="border-b border-slate-200 flex gap-4">
                            {Tab::ALL.into_iter().map(|t| view! {
                                <button
                                    class=move || format!(
                                        "pb-2 text-sm font-medium border-b-2 {}",
                                        if tab.get() == t { "border-blue-600 text-blue-700" } else { "border-transparent text-slate-500 hover:text-slate-700" }
                                    )
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>

                        {move || match tab.get() {
                            Tab::Overview => view! { <OverviewTab doc=tab_doc.clone() /> }.into_any(),
                            Tab::Risk => view! { <RiskTab doc=tab_doc.clone() /> }.into_any(),
                            Tab::Clauses => view! { <ClausesTab doc=tab_doc.clone() /> }.into_any(),
                        }}
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OverviewTab(doc: DocumentDetail) -> impl IntoView {
    let DocumentDetail {
        summary,
        ai_confidence_reasoning,
        lawyer_urgency,
        lawyer_recommendation,
        suggested_questions,
        similar_documents,
        ..
    } = doc;

    let reasoning = (!ai_confidence_reasoning.is_empty()).then(|| {
        view! { <p class="text-xs text-slate-500 mt-3">{ai_confidence_reasoning}</p> }
    });

    let similar = (!similar_documents.is_empty()).then(|| {
        view! {
            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-3">"Similar Passages"</h2>
                <ul class="space-y-2 text-sm">
                    {similar_documents.into_iter().map(|m| view! {
                        <li class="flex justify-between gap-4">
                            <span class="text-slate-700">{m.text}</span>
                            <span class="text-slate-500 shrink-0">{format_percentage(m.similarity_score)}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </section>
        }
    });

    view! {
        <div class="space-y-6">
            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-2">"Summary"</h2>
                <p class="text-slate-700 whitespace-pre-wrap">{summary}</p>
                {reasoning}
            </section>

            <UrgencyCallout level=lawyer_urgency recommended=lawyer_recommendation />

            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-3">"Suggested Questions"</h2>
                <StringList items=suggested_questions empty="No suggested questions available." numbered=false />
            </section>

            {similar}
        </div>
    }
}

#[component]
fn RiskTab(doc: DocumentDetail) -> impl IntoView {
    let breakdown = doc.risk_breakdown;

    view! {
        <div class="space-y-6">
            <section class="bg-white rounded-xl border border-slate-200 p-6 space-y-4">
                <h2 class="font-semibold">"Risk Breakdown"</h2>
                <RiskMeter score=overall_risk(&breakdown) label="Weighted overall risk" />
                {breakdown.entries().into_iter().zip(RISK_CATEGORIES).map(|((_, score), category)| view! {
                    <div>
                        <RiskMeter score=score label=category.label />
                        <p class="text-xs text-slate-500 mt-1">{category.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </section>

            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-3 text-red-700">"Red Flags"</h2>
                <StringList items=doc.red_flags.clone() empty="No red flags identified." numbered=true />
            </section>

            <section class="bg-white rounded-xl border border-slate-200 p-6 grid md:grid-cols-2 gap-6">
                <div>
                    <h3 class="font-semibold mb-2">"Risk Indicators"</h3>
                    <Chips items=doc.risk_indicators.clone() empty="No specific risk indicators found." />
                </div>
                <div>
                    <h3 class="font-semibold mb-2">"Urgency Signals"</h3>
                    <Chips items=doc.urgency_signals.clone() empty="None detected." />
                </div>
            </section>
        </div>
    }
}

#[component]
fn ClausesTab(doc: DocumentDetail) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-3">"Key Terms & Obligations"</h2>
                <StringList items=doc.key_clauses.clone() empty="No key clauses identified." numbered=true />
            </section>
            <section class="bg-white rounded-xl border border-slate-200 p-6">
                <h2 class="font-semibold mb-3">"Legal Terminology"</h2>
                <Chips items=doc.legal_terminology_found.clone() empty="No specific legal terminology detected." />
            </section>
        </div>
    }
}

#[component]
fn StringList(items: Vec<String>, empty: &'static str, numbered: bool) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="text-sm text-slate-500">{empty}</p> }.into_any();
    }
    view! {
        <ol class="space-y-2 text-sm text-slate-700">
            {items.into_iter().enumerate().map(|(i, item)| view! {
                <li class="flex gap-2">
                    <span class="text-slate-400 shrink-0">
                        {if numbered { format!("{}.", i + 1) } else { "\u{2022}".to_string() }}
                    </span>
                    <span>{item}</span>
                </li>
            }).collect::<Vec<_>>()}
        </ol>
    }
    .into_any()
}

#[component]
fn Chips(items: Vec<String>, empty: &'static str) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="text-sm text-slate-500">{empty}</p> }.into_any();
    }
    view! {
        <div class="flex flex-wrap gap-2">
            {items.into_iter().map(|item| view! {
                <span class="text-xs px-2 py-1 rounded-full bg-slate-100 text-slate-700">{item}</span>
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
