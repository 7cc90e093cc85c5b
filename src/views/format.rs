//! Display helpers shared by pages, widgets and the report.

use crate::risk::RiskLevel;
use crate::types::{DocumentListItem, RiskBreakdown};
use chrono::{DateTime, Utc};

/// How strongly a lawyer review is suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyDisplay {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub fn lawyer_urgency(level: RiskLevel) -> UrgencyDisplay {
    match level {
        RiskLevel::Low => UrgencyDisplay {
            label: "Low Priority",
            description: "Standard terms detected - basic review may be sufficient",
            icon: "\u{2713}",
        },
        RiskLevel::Medium => UrgencyDisplay {
            label: "Consider Review",
            description: "Some concerning terms found - consider legal review",
            icon: "\u{26a0}\u{fe0f}",
        },
        RiskLevel::High => UrgencyDisplay {
            label: "Recommended",
            description: "Significant risks identified - legal consultation recommended",
            icon: "\u{26a1}",
        },
        RiskLevel::Urgent => UrgencyDisplay {
            label: "Required",
            description: "High-risk clauses detected - immediate legal review required",
            icon: "\u{1f6a8}",
        },
    }
}

/// Unknown wire values fall back to the medium configuration.
pub fn lawyer_urgency_from_str(value: &str) -> UrgencyDisplay {
    lawyer_urgency(RiskLevel::parse_lenient(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const RISK_CATEGORIES: [RiskCategory; 5] = [
    RiskCategory {
        key: "financial_risk",
        label: "Financial Risk",
        description: "Potential financial penalties, costs, or obligations",
    },
    RiskCategory {
        key: "termination_risk",
        label: "Termination Risk",
        description: "Difficulty in ending the agreement or unfavorable exit terms",
    },
    RiskCategory {
        key: "liability_risk",
        label: "Liability Risk",
        description: "Personal or business liability exposure",
    },
    RiskCategory {
        key: "renewal_risk",
        label: "Renewal Risk",
        description: "Automatic renewals or lock-in mechanisms",
    },
    RiskCategory {
        key: "modification_risk",
        label: "Modification Risk",
        description: "Ability to unilaterally change terms",
    },
];

pub fn risk_category(key: &str) -> Option<&'static RiskCategory> {
    RISK_CATEGORIES.iter().find(|c| c.key == key)
}

const OVERALL_RISK_WEIGHTS: [f64; 5] = [0.25, 0.20, 0.25, 0.15, 0.15];

/// Weighted combination of the five sub-scores, capped at 1.
pub fn overall_risk(breakdown: &RiskBreakdown) -> f64 {
    let total: f64 = breakdown
        .entries()
        .iter()
        .zip(OVERALL_RISK_WEIGHTS)
        .map(|((_, score), weight)| score * weight)
        .sum();
    total.min(1.0)
}

/// `0.72` -> `"72%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

pub fn format_confidence_score(score: f64) -> String {
    let pct = (score * 100.0).round() as i64;
    let band = if pct >= 85 {
        "High"
    } else if pct >= 65 {
        "Medium"
    } else {
        "Low"
    };
    format!("{}% ({} Confidence)", pct, band)
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

/// `Mar 1, 2024, 10:00 AM`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn format_time_ago(at: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - *at).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        format_date(at)
    }
}

pub const DEFAULT_TRUNCATE_CHARS: usize = 150;

/// Cuts `text` to `max_chars` characters and appends `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}

/// Up to two uppercase initials.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuickStats {
    pub total: usize,
    pub high_risk: usize,
    pub average_risk: f64,
    pub requiring_lawyer: usize,
}

pub fn quick_stats(documents: &[DocumentListItem]) -> QuickStats {
    if documents.is_empty() {
        return QuickStats::default();
    }

    let high_risk = documents
        .iter()
        .filter(|d| d.risk_level().is_elevated())
        .count();
    let requiring_lawyer = documents
        .iter()
        .filter(|d| d.lawyer_urgency.is_elevated())
        .count();
    let average_risk =
        documents.iter().map(|d| d.risk_score).sum::<f64>() / documents.len() as f64;

    QuickStats {
        total: documents.len(),
        high_risk,
        average_risk,
        requiring_lawyer,
    }
}

/// The newest `limit` documents, newest first.
pub fn recent_documents(documents: &[DocumentListItem], limit: usize) -> Vec<DocumentListItem> {
    let mut sorted = documents.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
