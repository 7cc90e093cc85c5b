//! Client-side models for the legal analysis backend.
//!
//! Every type here is a value record received from (or derived for) the
//! backend. Nothing is persisted beyond memory.

mod error;

pub use error::{ApiError, ApiErrorKind, ClientError, Result};

use crate::risk::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============= Document Types =============

/// Contract category assigned by the backend classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DocumentType {
    LeaseAgreement,
    EmploymentContract,
    ServiceAgreement,
    Nda,
    TermsOfService,
    PurchaseAgreement,
    LoanAgreement,
    PartnershipAgreement,
    VendorContract,
    LicensingAgreement,
    InsurancePolicy,
    Warranty,
    OtherLegal,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 14] = [
        DocumentType::LeaseAgreement,
        DocumentType::EmploymentContract,
        DocumentType::ServiceAgreement,
        DocumentType::Nda,
        DocumentType::TermsOfService,
        DocumentType::PurchaseAgreement,
        DocumentType::LoanAgreement,
        DocumentType::PartnershipAgreement,
        DocumentType::VendorContract,
        DocumentType::LicensingAgreement,
        DocumentType::InsurancePolicy,
        DocumentType::Warranty,
        DocumentType::OtherLegal,
        DocumentType::Other,
    ];

    /// Wire name, e.g. `lease_agreement`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::LeaseAgreement => "lease_agreement",
            DocumentType::EmploymentContract => "employment_contract",
            DocumentType::ServiceAgreement => "service_agreement",
            DocumentType::Nda => "nda",
            DocumentType::TermsOfService => "terms_of_service",
            DocumentType::PurchaseAgreement => "purchase_agreement",
            DocumentType::LoanAgreement => "loan_agreement",
            DocumentType::PartnershipAgreement => "partnership_agreement",
            DocumentType::VendorContract => "vendor_contract",
            DocumentType::LicensingAgreement => "licensing_agreement",
            DocumentType::InsurancePolicy => "insurance_policy",
            DocumentType::Warranty => "warranty",
            DocumentType::OtherLegal => "other_legal",
            DocumentType::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::LeaseAgreement => "Lease Agreement",
            DocumentType::EmploymentContract => "Employment Contract",
            DocumentType::ServiceAgreement => "Service Agreement",
            DocumentType::Nda => "Non-Disclosure Agreement",
            DocumentType::TermsOfService => "Terms of Service",
            DocumentType::PurchaseAgreement => "Purchase Agreement",
            DocumentType::LoanAgreement => "Loan Agreement",
            DocumentType::PartnershipAgreement => "Partnership Agreement",
            DocumentType::VendorContract => "Vendor Contract",
            DocumentType::LicensingAgreement => "Licensing Agreement",
            DocumentType::InsurancePolicy => "Insurance Policy",
            DocumentType::Warranty => "Warranty",
            DocumentType::OtherLegal => "Other Legal Document",
            DocumentType::Other => "Other Document",
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .unwrap_or(DocumentType::Other)
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        DocumentType::Other
    }
}

/// Five named risk sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    #[serde(default)]
    pub financial_risk: f64,
    #[serde(default)]
    pub termination_risk: f64,
    #[serde(default)]
    pub liability_risk: f64,
    #[serde(default)]
    pub renewal_risk: f64,
    #[serde(default)]
    pub modification_risk: f64,
}

impl RiskBreakdown {
    /// `(key, score)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("financial_risk", self.financial_risk),
            ("termination_risk", self.termination_risk),
            ("liability_risk", self.liability_risk),
            ("renewal_risk", self.renewal_risk),
            ("modification_risk", self.modification_risk),
        ]
    }
}

/// A semantically similar passage, from another document or from the same one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatch {
    pub text: String,
    pub similarity_score: f64,
    #[serde(default)]
    pub legal_complexity: f64,
    #[serde(default)]
    pub chunk_type: String,
    #[serde(default)]
    pub rank: u32,
}

/// Output of the legal language model pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalModelAnalysis {
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub text_length: u64,
    #[serde(default)]
    pub embedding_dimension: u32,
    #[serde(default)]
    pub legal_complexity: f64,
    #[serde(default)]
    pub contains_legal_terms: Vec<String>,
    #[serde(default)]
    pub document_sections: Vec<String>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
    #[serde(default)]
    pub urgency_signals: Vec<String>,
}

/// Full AI analysis of one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_clauses: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub confidence_score: f64,
    pub risk_score: f64,
    #[serde(default)]
    pub lawyer_recommendation: bool,
    #[serde(default)]
    pub lawyer_urgency: RiskLevel,
    #[serde(default)]
    pub risk_breakdown: RiskBreakdown,
    #[serde(default)]
    pub complexity_score: f64,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub estimated_reading_time: u32,
    #[serde(default)]
    pub ai_confidence_reasoning: String,
    #[serde(default)]
    pub similar_documents: Vec<SemanticMatch>,
    #[serde(default)]
    pub legal_model_analysis: LegalModelAnalysis,
    #[serde(default)]
    pub legal_terminology_found: Vec<String>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
    #[serde(default)]
    pub urgency_signals: Vec<String>,
}

impl DocumentDetail {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

/// One row of the document list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentListItem {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub document_type: DocumentType,
    pub risk_score: f64,
    #[serde(default)]
    pub complexity_score: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub lawyer_urgency: RiskLevel,
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub legal_terms_count: u32,
    #[serde(default)]
    pub risk_indicators_count: u32,
    #[serde(default)]
    pub urgency_signals_count: u32,
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub chromadb_stored: bool,
    pub created_at: DateTime<Utc>,
}

impl DocumentListItem {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

/// `GET /documents` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentListItem>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub by_type: HashMap<String, usize>,
    #[serde(default)]
    pub risk_distribution: HashMap<String, usize>,
    #[serde(default)]
    pub model_usage: HashMap<String, usize>,
}

/// `DELETE /document/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `GET /suggest-questions/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedQuestionsResponse {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub document_id: String,
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchItemStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUploadItem {
    pub filename: String,
    pub status: BatchItemStatus,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /batch-upload` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUploadResponse {
    pub results: Vec<BatchUploadItem>,
    pub total_files: usize,
    pub successful_uploads: usize,
    pub failed_uploads: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareRequest {
    pub document_ids: Vec<String>,
}

/// `POST /compare-documents` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub comparison_summary: String,
    #[serde(default)]
    pub key_differences: Vec<String>,
    #[serde(default)]
    pub risk_comparison: HashMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// ============= Analytics Types =============

/// Server-computed summary across the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_documents: usize,
    #[serde(default)]
    pub document_types: HashMap<String, usize>,
    #[serde(default)]
    pub risk_distribution: HashMap<String, usize>,
    #[serde(default)]
    pub avg_confidence: f64,
    #[serde(default)]
    pub total_requiring_lawyer: usize,
}

impl AnalyticsSnapshot {
    /// The "nothing uploaded yet" aggregate.
    pub fn empty() -> Self {
        let risk_distribution = RiskLevel::ALL
            .iter()
            .map(|level| (level.as_str().to_string(), 0))
            .collect();

        Self {
            total_documents: 0,
            document_types: HashMap::new(),
            risk_distribution,
            avg_confidence: 0.0,
            total_requiring_lawyer: 0,
        }
    }

    /// Count for one risk bucket, zero when absent.
    pub fn risk_count(&self, level: RiskLevel) -> usize {
        self.risk_distribution
            .get(level.as_str())
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub speed: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelsState {
    Operational,
    Degraded,
}

/// `GET /legal-models/status` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalModelsStatus {
    #[serde(default)]
    pub available_models: HashMap<String, ModelInfo>,
    #[serde(default)]
    pub loaded_models: Vec<String>,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub total_models: usize,
    pub status: ModelsState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthComponents {
    pub api_server: String,
    pub openai_integration: String,
    pub vector_database: String,
    pub memory_usage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub documents_processed: u64,
    pub total_questions: u64,
    pub avg_risk_score: f64,
}

/// `GET /health` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthState,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub documents_processed: u64,
    #[serde(default)]
    pub components: Option<HealthComponents>,
    #[serde(default)]
    pub metrics: Option<HealthMetrics>,
}

// ============= Chat Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_implications: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_up_questions: Vec<String>,
}

impl ChatMessage {
    pub fn user(document_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, document_id, content)
    }

    pub fn assistant(document_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, document_id, content)
    }

    /// Assistant entry carrying the answer and its auxiliary fields.
    pub fn answer(document_id: impl Into<String>, response: &QuestionResponse) -> Self {
        Self {
            confidence_score: Some(response.confidence_score),
            relevant_sections: response.relevant_sections.clone(),
            legal_implications: Some(response.legal_implications.clone()),
            follow_up_questions: response.follow_up_questions.clone(),
            ..Self::assistant(document_id, response.answer.clone())
        }
    }

    fn new(role: MessageRole, document_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            document_id: document_id.into(),
            confidence_score: None,
            relevant_sections: Vec::new(),
            legal_implications: None,
            follow_up_questions: Vec::new(),
        }
    }
}

/// Stored transcript for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub document_id: String,
    pub document_name: String,
    pub messages: Vec<ChatMessage>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

/// `POST /ask-question` request body.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRequest {
    pub document_id: String,
    pub question: String,
}

/// `POST /ask-question` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub relevant_sections: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    #[serde(default)]
    pub legal_implications: String,
    #[serde(default)]
    pub semantic_matches: Vec<SemanticMatch>,
    #[serde(default)]
    pub legal_model_insights: serde_json::Map<String, serde_json::Value>,
}
