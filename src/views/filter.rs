//! Document list search, risk filter and sorting.

use crate::risk::RiskLevel;
use crate::types::DocumentListItem;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Filename,
    RiskScore,
    Confidence,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "Date",
            SortField::Filename => "Name",
            SortField::RiskScore => "Risk",
            SortField::Confidence => "Confidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    pub fn matches(&self, score: f64) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Level(level) => RiskLevel::from_score(score) == *level,
        }
    }

    /// Value used by the `<select>` in the list header.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFilter::All => "all",
            RiskFilter::Level(level) => level.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .map(RiskFilter::Level)
            .unwrap_or(RiskFilter::All)
    }
}

/// Card grid or compact rows. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Everything the list header controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub search: String,
    pub risk: RiskFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl DocumentQuery {
    /// Same field flips the order; a new field starts descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Desc;
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || self.risk != RiskFilter::All
    }

    /// Case-insensitive substring match over filename, summary and type.
    pub fn matches(&self, doc: &DocumentListItem) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_match = needle.is_empty()
            || doc.filename.to_lowercase().contains(&needle)
            || doc.summary.to_lowercase().contains(&needle)
            || doc.document_type.as_str().contains(&needle)
            || doc.document_type.label().to_lowercase().contains(&needle);

        text_match && self.risk.matches(doc.risk_score)
    }

    /// Filter, then sort. Ties keep their input order.
    pub fn apply(&self, documents: &[DocumentListItem]) -> Vec<DocumentListItem> {
        let mut filtered: Vec<DocumentListItem> = documents
            .iter()
            .filter(|doc| self.matches(doc))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| {
            let ordering = compare(self.sort_field, a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        filtered
    }
}

fn compare(field: SortField, a: &DocumentListItem, b: &DocumentListItem) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Filename => a.filename.to_lowercase().cmp(&b.filename.to_lowercase()),
        SortField::RiskScore => a.risk_score.total_cmp(&b.risk_score),
        SortField::Confidence => a.confidence_score.total_cmp(&b.confidence_score),
    }
}

/// Last-value-wins debouncing for the search box.
///
/// Each [`push`](Debouncer::push) returns a ticket. A timer started for that
/// ticket calls [`fire`](Debouncer::fire) after the delay; only the newest
/// ticket yields a value, and only once the quiet period has passed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    ticket: u64,
    pending: Option<(T, DateTime<Utc>)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: std::time::Duration) -> Self {
        Self {
            delay: Duration::from_std(delay).unwrap_or_else(|_| Duration::zero()),
            ticket: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> std::time::Duration {
        self.delay.to_std().unwrap_or_default()
    }

    pub fn push(&mut self, value: T, now: DateTime<Utc>) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = Some((value, now));
        self.ticket
    }

    pub fn fire(&mut self, ticket: u64, now: DateTime<Utc>) -> Option<T> {
        if ticket != self.ticket {
            return None;
        }
        match &self.pending {
            Some((_, pushed_at)) if now - *pushed_at >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }
}
