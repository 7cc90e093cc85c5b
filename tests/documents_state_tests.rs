//! Documents container behaviour: fetch, upload progress, delete.

mod common;

use common::mocks::FakeDocumentApi;
use common::{detail, list_item, listing};
use lexplain::state::DocumentsStore;
use lexplain::types::UploadFile;
use std::sync::Arc;

fn seeded() -> (Arc<FakeDocumentApi>, DocumentsStore) {
    let api = FakeDocumentApi::new();
    *api.listing.lock() = listing(vec![
        list_item("doc-1", "lease.pdf", 0.72),
        list_item("doc-2", "nda.pdf", 0.2),
        list_item("doc-3", "employment.pdf", 0.9),
    ]);
    api.details
        .lock()
        .insert("doc-1".to_string(), detail("doc-1", "lease.pdf", 0.72));
    let store = DocumentsStore::new(api.clone());
    (api, store)
}

#[tokio::test]
async fn test_fetch_replaces_list() {
    let (_api, store) = seeded();

    store.fetch_documents().await;

    let state = store.snapshot();
    assert_eq!(state.documents.len(), 3);
    assert_eq!(state.total_count, 3);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_list() {
    let (api, store) = seeded();
    store.fetch_documents().await;

    api.fail("get_documents");
    store.fetch_documents().await;

    let state = store.snapshot();
    assert_eq!(state.documents.len(), 3);
    assert_eq!(state.error.as_deref(), Some("Analysis backend unavailable"));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_delete_removes_one_entry_and_decrements_total() {
    let (_api, store) = seeded();
    store.fetch_documents().await;
    store.fetch_document("doc-1").await;

    assert!(store.delete_document("doc-2").await);

    let state = store.snapshot();
    let ids: Vec<_> = state.documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["doc-1", "doc-3"]);
    assert_eq!(state.total_count, 2);
    assert!(state.current_document.is_some());
}

#[tokio::test]
async fn test_delete_of_current_document_clears_it() {
    let (_api, store) = seeded();
    store.fetch_documents().await;
    store.fetch_document("doc-1").await;
    assert!(store.snapshot().current_document.is_some());

    assert!(store.delete_document("doc-1").await);

    let state = store.snapshot();
    assert!(state.current_document.is_none());
    assert_eq!(state.total_count, 2);
}

#[tokio::test]
async fn test_failed_delete_leaves_state_untouched() {
    let (api, store) = seeded();
    store.fetch_documents().await;
    let before = store.snapshot().documents;

    api.fail("delete_document");
    assert!(!store.delete_document("doc-1").await);

    let state = store.snapshot();
    assert_eq!(state.documents, before);
    assert_eq!(state.total_count, 3);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_upload_success_refetches_and_returns_detail() {
    let (api, store) = seeded();
    *api.uploaded.lock() = Some(detail("doc-9", "new.pdf", 0.4));

    let result = store
        .upload_document(UploadFile::new("new.pdf", b"%PDF-1.4".to_vec()))
        .await;

    assert_eq!(result.map(|d| d.id), Some("doc-9".to_string()));
    assert_eq!(api.call_count("get_documents"), 1);

    let state = store.snapshot();
    assert!(!state.uploading);
    assert_eq!(state.upload_progress, 0);
    assert_eq!(state.documents.len(), 3);
}

#[tokio::test]
async fn test_upload_failure_sets_error() {
    let (api, store) = seeded();
    api.fail("upload_document");

    let result = store
        .upload_document(UploadFile::new("new.pdf", vec![1, 2, 3]))
        .await;

    assert!(result.is_none());
    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Analysis backend unavailable"));
    assert!(!state.uploading);
    assert_eq!(api.call_count("get_documents"), 0);
}

#[tokio::test]
async fn test_upload_progress_never_decreases() {
    let (api, store) = seeded();
    *api.uploaded.lock() = Some(detail("doc-9", "new.pdf", 0.4));
    *api.progress_steps.lock() = vec![10, 40, 30, 80, 100];

    let observed = Arc::new(parking_lot::Mutex::new(Vec::new()));
    {
        let store = store.clone();
        let observed = Arc::clone(&observed);
        *api.probe.lock() = Some(Box::new(move || {
            observed.lock().push(store.read(|s| s.upload_progress));
        }));
    }

    store
        .upload_document(UploadFile::new("new.pdf", vec![0; 16]))
        .await;

    assert_eq!(*observed.lock(), vec![10, 40, 40, 80, 100]);
    assert_eq!(store.snapshot().upload_progress, 0);
    api.probe.lock().take();
}

#[tokio::test]
async fn test_clear_helpers() {
    let (api, store) = seeded();
    api.fail("get_documents");
    store.fetch_documents().await;
    store.fetch_document("doc-1").await;

    store.clear_error();
    store.clear_current_document();

    let state = store.snapshot();
    assert_eq!(state.error, None);
    assert!(state.current_document.is_none());
}

#[tokio::test]
async fn test_missing_document_records_not_found() {
    let (_api, store) = seeded();

    store.fetch_document("nope").await;

    assert_eq!(store.snapshot().error.as_deref(), Some("Document not found"));
}
