//! Portfolio analytics and legal model status.

use crate::components::{risk::bar_color, EmptyState, ErrorBanner, LoadingSpinner};
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::Title;
use lexplain::types::{AnalyticsSnapshot, LegalModelsStatus, ModelsState};
use lexplain::views::format_percentage;
use lexplain::RiskLevel;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let refresh = move || {
        let analytics = state.analytics_store();
        state.run(async move { analytics.refresh_all().await });
    };

    Effect::new(move |_| refresh());

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <Title text="Analytics" />

            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Analytics"</h1>
                    <p class="text-sm text-slate-500">"Risk across every analyzed document."</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg border border-slate-300 text-sm hover:bg-slate-50 disabled:opacity-50
                           flex items-center gap-2"
                    disabled=move || state.analytics.with(|a| a.loading)
                    on:click=move |_| refresh()
                >
                    <Show when=move || state.analytics.with(|a| a.loading)>
                        <LoadingSpinner size="w-4 h-4" />
                    </Show>
                    "Refresh"
                </button>
            </div>

            <ErrorBanner
                error=Signal::derive(move || state.analytics.with(|a| a.error.clone()))
                on_dismiss=move || state.analytics_store().clear_error()
            />

            {move || match state.analytics.with(|a| a.analytics.clone()) {
                None if state.analytics.with(|a| a.loading) => view! {
                    <div class="flex justify-center py-16"><LoadingSpinner size="w-10 h-10" /></div>
                }.into_any(),
                None => view! {
                    <EmptyState
                        icon="\u{1f4ca}"
                        title="No analytics available"
                        description="The analysis service did not return any figures."
                    />
                }.into_any(),
                Some(snapshot) if snapshot.total_documents == 0 => view! {
                    <EmptyState
                        icon="\u{1f4ca}"
                        title="Nothing to analyze yet"
                        description="Upload a document to start building your risk profile."
                    />
                }.into_any(),
                Some(snapshot) => view! { <SnapshotView snapshot=snapshot /> }.into_any(),
            }}

            {move || state.analytics.with(|a| a.models_status.clone()).map(|status| view! {
                <ModelsPanel status=status />
            })}
        </div>
    }
}

#[component]
fn SnapshotView(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let total = snapshot.total_documents;
    let share = move |count: usize| if total == 0 { 0.0 } else { count as f64 / total as f64 };

    let risk_rows = RiskLevel::ALL
        .into_iter()
        .map(|level| {
            let count = snapshot.risk_count(level);
            view! { <Bar label=level.label() count=count fraction=share(count) color=bar_color(level) /> }
        })
        .collect::<Vec<_>>();

    let mut types: Vec<(String, usize)> = snapshot.document_types.clone().into_iter().collect();
    types.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let type_rows = types
        .into_iter()
        .map(|(name, count)| {
            let label = lexplain::types::DocumentType::from(name).label();
            view! { <Bar label=label count=count fraction=share(count) color="bg-blue-500" /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            <Figure label="Documents" value=total.to_string() />
            <Figure label="Average Confidence" value=format_percentage(snapshot.avg_confidence) />
            <Figure label="Need a Lawyer" value=snapshot.total_requiring_lawyer.to_string() />
            <Figure
                label="Elevated Risk"
                value=RiskLevel::ALL
                    .into_iter()
                    .filter(|l| l.is_elevated())
                    .map(|l| snapshot.risk_count(l))
                    .sum::<usize>()
                    .to_string()
            />
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <section class="bg-white rounded-xl border border-slate-200 p-6 space-y-3">
                <h2 class="font-semibold">"Risk Distribution"</h2>
                {risk_rows}
            </section>
            <section class="bg-white rounded-xl border border-slate-200 p-6 space-y-3">
                <h2 class="font-semibold">"Document Types"</h2>
                {if type_rows.is_empty() {
                    view! { <p class="text-sm text-slate-500">"No document types recorded."</p> }.into_any()
                } else {
                    type_rows.into_any()
                }}
            </section>
        </div>
    }
}

#[component]
fn Figure(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-slate-200 p-4">
            <div class="text-xs uppercase tracking-wide text-slate-500">{label}</div>
            <div class="text-2xl font-bold mt-1">{value}</div>
        </div>
    }
}

#[component]
fn Bar(label: &'static str, count: usize, fraction: f64, color: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span>{label}</span>
                <span class="text-slate-500">{format!("{} \u{00b7} {}", count, format_percentage(fraction))}</span>
            </div>
            <div class="h-2 rounded-full bg-slate-100 overflow-hidden">
                <div
                    class=format!("h-full rounded-full {}", color)
                    style=format!("width: {:.1}%", fraction * 100.0)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn ModelsPanel(status: LegalModelsStatus) -> impl IntoView {
    let operational = status.status == ModelsState::Operational;
    let mut models: Vec<_> = status.available_models.into_iter().collect();
    models.sort_by(|a, b| a.0.cmp(&b.0));
    let loaded = status.loaded_models;

    view! {
        <section class="bg-white rounded-xl border border-slate-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="font-semibold">"Legal Models"</h2>
                <span class=format!(
                    "text-xs px-2 py-0.5 rounded-full {}",
                    if operational { "bg-green-100 text-green-800" } else { "bg-amber-100 text-amber-800" }
                )>
                    {if operational { "Operational" } else { "Degraded" }}
                </span>
            </div>
            <p class="text-sm text-slate-500 mb-4">
                {format!("{} of {} loaded on {}", loaded.len(), status.total_models, status.device)}
            </p>
            <table class="w-full text-left text-sm">
                <thead class="text-xs uppercase text-slate-500 border-b border-slate-200">
                    <tr>
                        <th class="py-2 pr-4">"Model"</th>
                        <th class="py-2 pr-4">"Description"</th>
                        <th class="py-2 pr-4">"Size"</th>
                        <th class="py-2 pr-4">"Speed"</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {models.into_iter().map(|(name, info)| {
                        let is_loaded = loaded.contains(&name);
                        view! {
                            <tr class="border-b border-slate-100">
                                <td class="py-2 pr-4 font-medium">
                                    {name}
                                    <div class="text-xs text-slate-400">{info.model_id}</div>
                                </td>
                                <td class="py-2 pr-4 text-slate-600">{info.description}</td>
                                <td class="py-2 pr-4">{info.size}</td>
                                <td class="py-2 pr-4">{info.speed}</td>
                                <td class="py-2 text-xs">
                                    {if is_loaded { "Loaded" } else { "" }}
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
