//! Document list, current detail and upload progress.

use super::ChangeNotifier;
use crate::api::{DocumentApi, UploadProgress};
use crate::types::{DocumentDetail, DocumentListItem, DocumentsResponse, UploadFile};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentsState {
    pub documents: Vec<DocumentListItem>,
    pub current_document: Option<DocumentDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub uploading: bool,
    /// Percentage of the in-flight upload; never decreases during one upload.
    pub upload_progress: u8,
    pub total_count: usize,
    pub by_type: HashMap<String, usize>,
    pub risk_distribution: HashMap<String, usize>,
    pub model_usage: HashMap<String, usize>,
}

impl DocumentsState {
    fn apply_listing(&mut self, response: DocumentsResponse) {
        self.documents = response.documents;
        self.total_count = response.total_count;
        self.by_type = response.by_type;
        self.risk_distribution = response.risk_distribution;
        self.model_usage = response.model_usage;
    }
}

#[derive(Clone)]
pub struct DocumentsStore {
    api: Arc<dyn DocumentApi>,
    state: Arc<RwLock<DocumentsState>>,
    changes: ChangeNotifier,
}

impl DocumentsStore {
    pub fn new(api: Arc<dyn DocumentApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(DocumentsState::default())),
            changes: ChangeNotifier::new(),
        }
    }

    pub fn snapshot(&self) -> DocumentsState {
        self.state.read().clone()
    }

    /// Read a projection without cloning the whole state.
    pub fn read<R>(&self, f: impl FnOnce(&DocumentsState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub fn api(&self) -> Arc<dyn DocumentApi> {
        Arc::clone(&self.api)
    }

    fn update(&self, f: impl FnOnce(&mut DocumentsState)) {
        f(&mut self.state.write());
        self.changes.notify();
    }

    /// Replace the list and aggregates. A failure keeps the previous list.
    pub async fn fetch_documents(&self) {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.get_documents().await;

        self.update(|s| {
            match result {
                Ok(response) => {
                    debug!(count = response.documents.len(), "document list replaced");
                    s.apply_listing(response);
                }
                Err(e) => {
                    error!("Error fetching documents: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
    }

    pub async fn fetch_document(&self, id: &str) {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.get_document(id).await;

        self.update(|s| {
            match result {
                Ok(detail) => s.current_document = Some(detail),
                Err(e) => {
                    error!(id, "Error fetching document: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
    }

    /// Upload one file. On success the list is refetched and the analysis
    /// returned; on failure the error is recorded and `None` returned.
    pub async fn upload_document(&self, file: UploadFile) -> Option<DocumentDetail> {
        {
            let mut state = self.state.write();
            if state.uploading {
                warn!(filename = %file.name, "upload already in progress, ignoring");
                return None;
            }
            state.uploading = true;
            state.upload_progress = 0;
            state.error = None;
        }
        self.changes.notify();

        let result = self
            .api
            .upload_document(file, Some(self.progress_reporter()))
            .await;

        let detail = match result {
            Ok(detail) => {
                info!(id = %detail.id, "upload complete");
                self.fetch_documents().await;
                Some(detail)
            }
            Err(e) => {
                error!("Error uploading document: {}", e);
                self.update(|s| s.error = Some(e.message()));
                None
            }
        };

        self.update(|s| {
            s.uploading = false;
            s.upload_progress = 0;
        });
        detail
    }

    fn progress_reporter(&self) -> UploadProgress {
        let state = Arc::clone(&self.state);
        let changes = self.changes.clone();

        Arc::new(move |percent: u8| {
            let advanced = {
                let mut s = state.write();
                let next = percent.min(100);
                if s.uploading && next > s.upload_progress {
                    s.upload_progress = next;
                    true
                } else {
                    false
                }
            };
            if advanced {
                changes.notify();
            }
        })
    }

    /// Delete on the server, then drop the entry locally.
    ///
    /// Local state is untouched unless the call succeeds.
    pub async fn delete_document(&self, id: &str) -> bool {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.delete_document(id).await;

        let deleted = result.is_ok();
        self.update(|s| {
            match result {
                Ok(_) => {
                    let before = s.documents.len();
                    s.documents.retain(|doc| doc.id != id);
                    if s.documents.len() != before {
                        s.total_count = s.total_count.saturating_sub(1);
                    }
                    if s.current_document.as_ref().is_some_and(|doc| doc.id == id) {
                        s.current_document = None;
                    }
                    info!(id, "document deleted");
                }
                Err(e) => {
                    error!(id, "Error deleting document: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
        deleted
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error = None);
    }

    pub fn clear_current_document(&self) {
        self.update(|s| s.current_document = None);
    }
}
