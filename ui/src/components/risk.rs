//! Risk badges and meters. Every colour decision goes through
//! [`RiskLevel::from_score`], the same bucket function the list filter uses.

use leptos::prelude::*;
use lexplain::views::format::lawyer_urgency;
use lexplain::views::{format_confidence_score, format_percentage};
use lexplain::RiskLevel;

pub fn risk_colors(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-emerald-100 text-emerald-800 border-emerald-200",
        RiskLevel::Medium => "bg-amber-100 text-amber-800 border-amber-200",
        RiskLevel::High => "bg-orange-100 text-orange-800 border-orange-200",
        RiskLevel::Urgent => "bg-red-100 text-red-800 border-red-200",
    }
}

pub fn bar_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-emerald-500",
        RiskLevel::Medium => "bg-amber-500",
        RiskLevel::High => "bg-orange-500",
        RiskLevel::Urgent => "bg-red-600",
    }
}

/// Compact bucket label, e.g. "high".
#[component]
pub fn RiskBadge(score: f64) -> impl IntoView {
    let level = RiskLevel::from_score(score);
    view! {
        <span class=format!(
            "inline-flex items-center px-2 py-0.5 rounded-full border text-xs font-medium {}",
            risk_colors(level)
        )>
            {level.as_str()}
        </span>
    }
}

/// Horizontal bar with percentage and bucket label.
#[component]
pub fn RiskMeter(
    score: f64,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let level = RiskLevel::from_score(score);
    let width = format!("width: {}%", (score.clamp(0.0, 1.0) * 100.0).round());

    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-sm">
                <span class="font-medium text-slate-700">{label.unwrap_or(level.label())}</span>
                <span class="text-slate-600">{format_percentage(score)}</span>
            </div>
            <div class="h-2 bg-slate-200 rounded-full overflow-hidden">
                <div class=format!("h-full rounded-full {}", bar_color(level)) style=width></div>
            </div>
        </div>
    }
}

#[component]
pub fn ConfidenceBadge(score: f64) -> impl IntoView {
    view! {
        <span class="text-xs text-slate-500">{format_confidence_score(score)}</span>
    }
}

/// Lawyer recommendation panel on the document view.
#[component]
pub fn UrgencyCallout(level: RiskLevel, recommended: bool) -> impl IntoView {
    let display = lawyer_urgency(level);
    view! {
        <div class=format!("p-4 rounded-lg border {}", risk_colors(level))>
            <div class="flex items-center gap-2 font-semibold">
                <span>{display.icon}</span>
                <span>"Lawyer review: " {display.label}</span>
            </div>
            <p class="text-sm mt-1">{display.description}</p>
            <Show when=move || recommended>
                <p class="text-sm mt-2 font-medium">"A legal professional should review this document."</p>
            </Show>
        </div>
    }
}
