//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

use chrono::{TimeZone, Utc};
use lexplain::types::{
    DocumentDetail, DocumentListItem, DocumentType, DocumentsResponse, QuestionResponse,
};
use lexplain::RiskLevel;
use serde_json::{json, Value};

/// Backend JSON for a full analysis.
pub fn detail_json(id: &str, filename: &str, risk: f64) -> Value {
    json!({
        "id": id,
        "filename": filename,
        "summary": "Twelve month residential lease with automatic renewal.",
        "key_clauses": [
            "Rent of $2,000 is due on the first of each month.",
            "Tenant is responsible for all utilities."
        ],
        "red_flags": ["Automatic renewal unless cancelled 90 days in advance."],
        "confidence_score": 0.91,
        "risk_score": risk,
        "lawyer_recommendation": true,
        "lawyer_urgency": "high",
        "risk_breakdown": {
            "financial_risk": 0.7,
            "termination_risk": 0.8,
            "liability_risk": 0.6,
            "renewal_risk": 0.9,
            "modification_risk": 0.3
        },
        "complexity_score": 0.55,
        "suggested_questions": ["Can I sublet the apartment?"],
        "document_type": "lease_agreement",
        "estimated_reading_time": 7,
        "ai_confidence_reasoning": "Clear structure and standard terminology.",
        "similar_documents": [],
        "legal_model_analysis": {
            "model_used": "legal-bert",
            "text_length": 18000,
            "embedding_dimension": 768,
            "legal_complexity": 0.5,
            "contains_legal_terms": ["indemnify"],
            "document_sections": ["Rent", "Term"],
            "risk_indicators": ["automatic renewal"],
            "urgency_signals": []
        },
        "legal_terminology_found": ["indemnify", "sublet", "holdover"],
        "risk_indicators": ["automatic renewal", "late fee"],
        "urgency_signals": []
    })
}

pub fn detail(id: &str, filename: &str, risk: f64) -> DocumentDetail {
    serde_json::from_value(detail_json(id, filename, risk)).expect("fixture detail")
}

pub fn list_item_json(id: &str, filename: &str, risk: f64, day: u32) -> Value {
    json!({
        "id": id,
        "filename": filename,
        "summary": format!("Summary of {}", filename),
        "document_type": "lease_agreement",
        "risk_score": risk,
        "complexity_score": 0.4,
        "confidence_score": 0.88,
        "lawyer_urgency": RiskLevel::from_score(risk).as_str(),
        "reading_time": 5,
        "validated": true,
        "legal_terms_count": 4,
        "risk_indicators_count": 2,
        "urgency_signals_count": 0,
        "model_used": "legal-bert",
        "chromadb_stored": true,
        "created_at": format!("2024-03-{:02}T09:00:00Z", day)
    })
}

pub fn list_item(id: &str, filename: &str, risk: f64) -> DocumentListItem {
    DocumentListItem {
        id: id.to_string(),
        filename: filename.to_string(),
        summary: format!("Summary of {}", filename),
        document_type: DocumentType::LeaseAgreement,
        risk_score: risk,
        complexity_score: 0.4,
        confidence_score: 0.88,
        lawyer_urgency: RiskLevel::from_score(risk),
        reading_time: 5,
        validated: true,
        legal_terms_count: 4,
        risk_indicators_count: 2,
        urgency_signals_count: 0,
        model_used: "legal-bert".to_string(),
        chromadb_stored: true,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
}

pub fn listing(items: Vec<DocumentListItem>) -> DocumentsResponse {
    DocumentsResponse {
        total_count: items.len(),
        documents: items,
        ..Default::default()
    }
}

pub fn answer(text: &str, follow_ups: &[&str]) -> QuestionResponse {
    QuestionResponse {
        answer: text.to_string(),
        confidence_score: 0.82,
        relevant_sections: vec!["Section 4".to_string()],
        follow_up_questions: follow_ups.iter().map(|q| q.to_string()).collect(),
        legal_implications: "Notice must be written.".to_string(),
        semantic_matches: vec![],
        legal_model_insights: Default::default(),
    }
}
