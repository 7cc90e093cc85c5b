//! Risk buckets.
//!
//! [`RiskLevel::from_score`] is the only place a risk score is turned into a
//! bucket. Badges, meters, filters, charts and the report all go through it.

use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the low bucket.
pub const LOW_MAX: f64 = 0.3;
/// Upper bound (inclusive) of the medium bucket.
pub const MEDIUM_MAX: f64 = 0.6;
/// Upper bound (inclusive) of the high bucket.
pub const HIGH_MAX: f64 = 0.8;

/// Four-way risk / urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Urgent,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Urgent,
    ];

    /// Buckets a score in `[0, 1]`.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_MAX {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX {
            RiskLevel::Medium
        } else if score <= HIGH_MAX {
            RiskLevel::High
        } else {
            RiskLevel::Urgent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Urgent => "urgent",
        }
    }

    /// Meter / detail label, e.g. "High Risk".
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Urgent => "Urgent Review",
        }
    }

    /// Short badge text.
    pub fn short_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Urgent => "Urgent",
        }
    }

    /// Parses a wire value; anything unrecognised is medium.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            "urgent" => RiskLevel::Urgent,
            _ => RiskLevel::Medium,
        }
    }

    /// Whether this level counts toward "high risk" totals.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Urgent)
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Medium
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        RiskLevel::parse_lenient(&value)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
