//! Analytics container against a mocked backend.

use lexplain::api::{ApiClient, DocumentService};
use lexplain::state::AnalyticsStore;
use lexplain::types::ModelsState;
use lexplain::{ClientConfig, RiskLevel};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> AnalyticsStore {
    let config = ClientConfig::with_base_url(server.uri());
    let client = ApiClient::new(&config).unwrap();
    AnalyticsStore::new(Arc::new(DocumentService::new(client, &config)))
}

async fn mount_models(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/legal-models/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available_models": {
                "legal-bert": {
                    "model_id": "nlpaueb/legal-bert-base-uncased",
                    "description": "Legal domain BERT",
                    "size": "440MB",
                    "speed": "fast"
                }
            },
            "loaded_models": ["legal-bert"],
            "device": "cpu",
            "total_models": 1,
            "status": "operational"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_refresh_all_commits_both() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_documents": 5,
            "document_types": {"lease_agreement": 3, "nda": 2},
            "risk_distribution": {"low": 1, "medium": 2, "high": 1, "urgent": 1},
            "avg_confidence": 0.84,
            "total_requiring_lawyer": 2
        })))
        .mount(&server)
        .await;
    mount_models(&server).await;

    let store = store_for(&server);
    store.refresh_all().await;

    let state = store.snapshot();
    let analytics = state.analytics.expect("analytics");
    assert_eq!(analytics.total_documents, 5);
    assert_eq!(analytics.risk_count(RiskLevel::Medium), 2);
    assert_eq!(state.models_status.map(|m| m.status), Some(ModelsState::Operational));
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_empty_collection_yields_zeroed_analytics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "No documents found"})),
        )
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_analytics().await;

    let state = store.snapshot();
    let analytics = state.analytics.expect("empty analytics");
    assert_eq!(analytics.total_documents, 0);
    for level in RiskLevel::ALL {
        assert_eq!(analytics.risk_count(level), 0);
    }
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_refresh_all_is_all_or_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_models(&server).await;

    let store = store_for(&server);
    store.refresh_all().await;

    let state = store.snapshot();
    assert!(state.analytics.is_none());
    assert!(state.models_status.is_none());
    assert_eq!(state.error.as_deref(), Some("Request failed with status 500"));

    store.clear_error();
    assert_eq!(store.snapshot().error, None);
}
