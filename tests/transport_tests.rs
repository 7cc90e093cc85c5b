//! Transport and service tests against a mocked backend.
//!
//! Every test starts its own wiremock server; nothing here needs the real
//! analysis service.

mod common;

use common::{detail_json, list_item_json};
use lexplain::api::{ApiClient, ChatApi, ChatService, DocumentApi, DocumentService};
use lexplain::types::{ApiErrorKind, ClientError, DocumentsResponse, UploadFile};
use lexplain::ClientConfig;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::with_base_url(&server.uri())
}

fn documents_for(server: &MockServer) -> DocumentService {
    let config = config_for(server);
    let client = ApiClient::new(&config).expect("client");
    DocumentService::new(client, &config)
}

fn chat_for(server: &MockServer) -> ChatService {
    let client = ApiClient::new(&config_for(server)).expect("client");
    ChatService::new(client)
}

fn api_error(err: ClientError) -> lexplain::ApiError {
    match err {
        ClientError::Api(e) => e,
        other => panic!("expected an API error, got {:?}", other),
    }
}

// ============= Plain requests =============

#[tokio::test]
async fn test_get_documents_decodes_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                list_item_json("doc-1", "lease.pdf", 0.72, 3),
                list_item_json("doc-2", "nda.pdf", 0.2, 4)
            ],
            "total_count": 2,
            "by_type": {"lease_agreement": 2},
            "risk_distribution": {"high": 1, "low": 1},
            "model_usage": {"legal-bert": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = documents_for(&server).get_documents().await.unwrap();

    assert_eq!(listing.total_count, 2);
    assert_eq!(listing.documents[0].filename, "lease.pdf");
    assert_eq!(listing.documents[0].risk_level().as_str(), "high");
    assert_eq!(listing.by_type.get("lease_agreement"), Some(&2));
}

#[tokio::test]
async fn test_get_document_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/document/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(
            "doc-1",
            "lease.pdf",
            0.72,
        )))
        .mount(&server)
        .await;

    let doc = documents_for(&server).get_document("doc-1").await.unwrap();

    assert_eq!(doc.id, "doc-1");
    assert_eq!(doc.key_clauses.len(), 2);
    assert_eq!(doc.risk_breakdown.renewal_risk, 0.9);
}

#[tokio::test]
async fn test_delete_document() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/document/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Document doc-1 deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = documents_for(&server).delete_document("doc-1").await.unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_unparseable_success_body_is_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_error(documents_for(&server).get_documents().await.unwrap_err());
    assert_eq!(err.kind, ApiErrorKind::Client);
    assert!(err.message.starts_with("Failed to parse response"));
}

// ============= Error normalization =============

#[tokio::test]
async fn test_structured_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "detail": {
                "error": "Service unavailable",
                "message": "Vector database is offline",
                "suggestion": "Try again in a few minutes"
            }
        })))
        .mount(&server)
        .await;

    let err = api_error(documents_for(&server).get_analytics().await.unwrap_err());

    assert_eq!(err.kind, ApiErrorKind::Request { status: 503 });
    assert_eq!(err.error, "Service unavailable");
    assert_eq!(err.message, "Vector database is offline");
    assert_eq!(err.suggestion.as_deref(), Some("Try again in a few minutes"));
}

#[tokio::test]
async fn test_string_detail_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/document/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Document not found"})),
        )
        .mount(&server)
        .await;

    let err = api_error(
        documents_for(&server)
            .get_document("missing")
            .await
            .unwrap_err(),
    );

    assert!(err.is_not_found());
    assert_eq!(err.message, "Document not found");
}

#[tokio::test]
async fn test_empty_error_body_gets_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api_error(documents_for(&server).get_documents().await.unwrap_err());

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message, "Request failed with status 500");
}

#[tokio::test]
async fn test_stalled_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout_secs = 1;
    let client = ApiClient::new(&config).unwrap();
    let service = DocumentService::new(client, &config);

    let started = Instant::now();
    let err = api_error(service.get_documents().await.unwrap_err());

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = ClientConfig::with_base_url("http://127.0.0.1:1");
    let client = ApiClient::new(&config).unwrap();
    let service = DocumentService::new(client, &config);

    let err = api_error(service.get_documents().await.unwrap_err());

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(
        err.message,
        "Unable to connect to the server. Please check your connection."
    );
}

// ============= Upload =============

#[tokio::test]
async fn test_upload_reports_progress_up_to_100() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(
            "doc-7",
            "lease.pdf",
            0.72,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::<u8>::new()));
    let sink = Arc::clone(&seen);
    let progress: lexplain::api::UploadProgress = Arc::new(move |pct| sink.lock().push(pct));

    let bytes = vec![b'x'; 200 * 1024];
    let doc = documents_for(&server)
        .upload_document(UploadFile::new("lease.pdf", bytes), Some(progress))
        .await
        .unwrap();

    assert_eq!(doc.id, "doc-7");
    let seen = seen.lock().clone();
    assert!(!seen.is_empty());
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress went backwards: {:?}", seen);
    assert_eq!(seen.last(), Some(&100));
}

#[tokio::test]
async fn test_invalid_upload_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = documents_for(&server);

    let err = service
        .upload_document(UploadFile::new("notes.docx", vec![1, 2, 3]), None)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Only PDF files are supported");

    let err = service
        .upload_document(UploadFile::new("huge.pdf", vec![0; 25 * 1024 * 1024 + 1]), None)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "File size must be less than 25MB");
}

#[tokio::test]
async fn test_upload_rejection_keeps_backend_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": {
                "error": "Not a legal document",
                "message": "The uploaded file does not look like a contract",
                "reason": "no legal terminology found"
            }
        })))
        .mount(&server)
        .await;

    let err = api_error(
        documents_for(&server)
            .upload_document(UploadFile::new("recipe.pdf", b"%PDF-1.4".to_vec()), None)
            .await
            .unwrap_err(),
    );

    assert_eq!(err.error, "Not a legal document");
    assert_eq!(err.reason.as_deref(), Some("no legal terminology found"));
}

#[tokio::test]
async fn test_batch_upload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/batch-upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"filename": "a.pdf", "status": "success", "document_id": "doc-a", "risk_score": 0.4},
                {"filename": "b.pdf", "status": "failed", "error": "Not a legal document"}
            ],
            "total_files": 2,
            "successful_uploads": 1,
            "failed_uploads": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = documents_for(&server);
    assert!(service.batch_upload(vec![]).await.is_err());

    let response = service
        .batch_upload(vec![
            UploadFile::new("a.pdf", b"%PDF-1.4 a".to_vec()),
            UploadFile::new("b.pdf", b"%PDF-1.4 b".to_vec()),
        ])
        .await
        .unwrap();

    assert_eq!(response.successful_uploads, 1);
    assert_eq!(response.results[0].document_id.as_deref(), Some("doc-a"));
    assert_eq!(response.results[1].error.as_deref(), Some("Not a legal document"));
}

#[tokio::test]
async fn test_compare_documents() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/compare-documents"))
        .and(body_json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comparison_summary": "The lease carries more renewal risk.",
            "key_differences": ["Renewal terms"],
            "risk_comparison": {"doc-1": 0.72, "doc-2": 0.2},
            "recommendations": ["Negotiate the renewal clause"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = documents_for(&server);
    let one = vec!["doc-1".to_string()];
    assert!(matches!(
        service.compare_documents(&one).await,
        Err(ClientError::Validation(_))
    ));

    let ids = vec!["doc-1".to_string(), "doc-2".to_string()];
    let comparison = service.compare_documents(&ids).await.unwrap();
    assert_eq!(comparison.risk_comparison.get("doc-1"), Some(&0.72));
}

// ============= Chat =============

#[tokio::test]
async fn test_ask_question_sends_trimmed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question"))
        .and(body_json(json!({
            "document_id": "doc-1",
            "question": "Can I terminate early?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Yes, with 60 days written notice.",
            "confidence_score": 0.87,
            "relevant_sections": ["Section 12"],
            "follow_up_questions": ["Is there a fee?"],
            "legal_implications": "Early exit fee may apply.",
            "semantic_matches": [],
            "legal_model_insights": {"model": "legal-bert"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = chat_for(&server)
        .ask_question("doc-1", "  Can I terminate early?  ")
        .await
        .unwrap();

    assert_eq!(response.answer, "Yes, with 60 days written notice.");
    assert_eq!(response.follow_up_questions, vec!["Is there a fee?"]);
    assert_eq!(
        response.legal_model_insights.get("model"),
        Some(&json!("legal-bert"))
    );
}

#[tokio::test]
async fn test_overlong_question_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = chat_for(&server)
        .ask_question("doc-1", &"a".repeat(501))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_suggested_questions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/suggest-questions/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": ["What is the notice period?", "Who pays for repairs?"],
            "document_id": "doc-1"
        })))
        .mount(&server)
        .await;

    let questions = chat_for(&server).get_suggested_questions("doc-1").await.unwrap();
    assert_eq!(questions.len(), 2);

    let questions = documents_for(&server)
        .get_suggested_questions("doc-1")
        .await
        .unwrap();
    assert_eq!(questions[0], "What is the notice period?");
}

// ============= Health =============

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "timestamp": "2024-03-01T09:00:00Z",
            "version": "8.0.0",
            "documents_processed": 12
        })))
        .mount(&server)
        .await;

    let service = documents_for(&server);
    assert!(service.client().health_check().await);

    let health = service.health().await.unwrap();
    assert_eq!(health.version, "8.0.0");
    assert_eq!(health.documents_processed, 12);
}

#[tokio::test]
async fn test_health_check_false_on_error_or_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    assert!(!documents_for(&server).client().health_check().await);

    let offline = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:1")).unwrap();
    assert!(!offline.health_check().await);
}

#[tokio::test]
async fn test_empty_listing_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let listing = documents_for(&server).get_documents().await.unwrap();
    assert_eq!(listing, DocumentsResponse::default());
}
