//! View logic that does not depend on the rendering framework.

pub mod filter;
pub mod format;

pub use filter::{Debouncer, DocumentQuery, RiskFilter, SortField, SortOrder, ViewMode};
pub use format::{
    format_confidence_score, format_date, format_file_size, format_percentage, format_time_ago,
    initials, lawyer_urgency, overall_risk, quick_stats, recent_documents, truncate_text,
    QuickStats, RISK_CATEGORIES,
};
