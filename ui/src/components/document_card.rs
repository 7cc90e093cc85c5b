//! Document list entries in grid and list density.

use crate::components::{ConfidenceBadge, RiskBadge};
use leptos::prelude::*;
use lexplain::types::DocumentListItem;
use lexplain::views::format::DEFAULT_TRUNCATE_CHARS;
use lexplain::views::{format_date, format_time_ago, truncate_text};

#[component]
pub fn DocumentCard(
    document: DocumentListItem,
    /// Called with the document id when delete is clicked.
    on_delete: Callback<String>,
) -> impl IntoView {
    let href = format!("/documents/{}", document.id);
    let id = document.id.clone();
    let age = format_time_ago(&document.created_at, chrono::Utc::now());

    view! {
        <div class="bg-white rounded-xl border border-slate-200 p-5 hover:shadow-md transition-shadow flex flex-col">
            <div class="flex items-start justify-between gap-2">
                <a href=href.clone() class="font-semibold text-slate-900 hover:text-blue-700 truncate">
                    {document.filename.clone()}
                </a>
                <RiskBadge score=document.risk_score />
            </div>
            <p class="text-xs text-slate-500 mt-1">
                {document.document_type.label()} " \u{00b7} " {age}
            </p>
            <p class="text-sm text-slate-600 mt-3 flex-1">
                {truncate_text(&document.summary, DEFAULT_TRUNCATE_CHARS)}
            </p>
            <div class="mt-4 flex items-center justify-between">
                <ConfidenceBadge score=document.confidence_score />
                <div class="flex gap-2">
                    <a href=href class="text-sm text-blue-600 hover:underline">"View"</a>
                    <button
                        class="text-sm text-red-600 hover:underline"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DocumentRow(document: DocumentListItem, on_delete: Callback<String>) -> impl IntoView {
    let href = format!("/documents/{}", document.id);
    let id = document.id.clone();

    view! {
        <tr class="border-b border-slate-100 hover:bg-slate-50">
            <td class="py-3 px-4">
                <a href=href class="font-medium text-slate-900 hover:text-blue-700">{document.filename.clone()}</a>
            </td>
            <td class="py-3 px-4 text-sm text-slate-600">{document.document_type.label()}</td>
            <td class="py-3 px-4"><RiskBadge score=document.risk_score /></td>
            <td class="py-3 px-4"><ConfidenceBadge score=document.confidence_score /></td>
            <td class="py-3 px-4 text-sm text-slate-500">{format_date(&document.created_at)}</td>
            <td class="py-3 px-4 text-right">
                <button
                    class="text-sm text-red-600 hover:underline"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
