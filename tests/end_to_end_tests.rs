//! Upload, browse, chat and export through a fully wired [`ClientContext`].

mod common;

use common::{detail_json, list_item_json};
use lexplain::types::{MessageRole, UploadFile};
use lexplain::views::{format_percentage, DocumentQuery, RiskFilter};
use lexplain::{ClientConfig, ClientContext, RiskLevel};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(
            "doc-lease",
            "lease.pdf",
            0.72,
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                list_item_json("doc-lease", "lease.pdf", 0.72, 12),
                list_item_json("doc-nda", "nda.pdf", 0.25, 10)
            ],
            "total_count": 2
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/document/doc-lease"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(
            "doc-lease",
            "lease.pdf",
            0.72,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/suggest-questions/doc-lease"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": ["Can I sublet the apartment?"],
            "document_id": "doc-lease"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ask-question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Subletting requires written landlord consent.",
            "confidence_score": 0.9,
            "relevant_sections": ["Section 9"],
            "follow_up_questions": [],
            "legal_implications": "Unauthorized subletting is a breach.",
            "semantic_matches": [],
            "legal_model_insights": {}
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_upload_then_review_chat_and_export() {
    let server = backend().await;
    let ctx = ClientContext::new(ClientConfig::with_base_url(server.uri())).unwrap();

    let uploaded = ctx
        .documents
        .upload_document(UploadFile::new("lease.pdf", b"%PDF-1.4 lease".to_vec()))
        .await
        .expect("upload succeeds");

    assert_eq!(uploaded.risk_level(), RiskLevel::High);
    assert_eq!(uploaded.risk_level().label(), "High Risk");
    assert_eq!(format_percentage(uploaded.risk_score), "72%");

    // The upload refetched the list.
    let documents = ctx.documents.snapshot().documents;
    assert_eq!(documents.len(), 2);
    let lease = documents.iter().find(|d| d.id == "doc-lease").unwrap();
    assert_eq!(lease.risk_level(), RiskLevel::High);

    let query = DocumentQuery {
        risk: RiskFilter::Level(RiskLevel::High),
        ..Default::default()
    };
    let high: Vec<_> = query.apply(&documents).into_iter().map(|d| d.id).collect();
    assert_eq!(high, vec!["doc-lease"]);

    ctx.documents.fetch_document(&uploaded.id).await;
    assert_eq!(
        ctx.documents.snapshot().current_document.map(|d| d.filename),
        Some("lease.pdf".to_string())
    );

    ctx.chat.open_chat(&uploaded.id, &uploaded.filename).await;
    assert_eq!(
        ctx.chat.snapshot().suggested_questions,
        vec!["Can I sublet the apartment?"]
    );

    ctx.chat
        .select_suggested_question("Can I sublet the apartment?")
        .await;
    let messages = ctx.chat.snapshot().messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(
        messages[2].content,
        "Subletting requires written landlord consent."
    );
    // No follow-ups came back, so the previous suggestion stays.
    assert_eq!(ctx.chat.snapshot().suggested_questions.len(), 1);

    let report = ctx.document_service.export_report(&uploaded.id).await.unwrap();
    assert!(report.bytes.starts_with(b"%PDF"));
    assert!(report.filename.starts_with("legal_analysis_lease_"));
}

#[tokio::test]
async fn test_invalid_base_url_is_rejected() {
    let err = ClientContext::new(ClientConfig::with_base_url("localhost:8000"))
        .err()
        .expect("invalid config");
    assert!(err.message().contains("api_base_url"));
}
