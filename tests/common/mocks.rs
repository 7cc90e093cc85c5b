//! Hand-written service fakes.
//!
//! Unlike the `mockall` mocks used in unit tests, these keep state between
//! calls (a document list that shrinks on delete, a queue of answers) so
//! container behaviour can be checked across several actions.

use lexplain::api::UploadProgress;
use lexplain::types::{
    AnalyticsSnapshot, ApiError, BatchUploadResponse, ClientError, ComparisonResponse,
    DeleteResponse, DocumentDetail, DocumentsResponse, HealthResponse, HealthState,
    LegalModelsStatus, ModelsState, QuestionResponse, Result, UploadFile,
};
use lexplain::{ChatApi, DocumentApi};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn server_error() -> ClientError {
    ClientError::Api(ApiError::from_response(
        500,
        r#"{"detail":{"error":"Internal error","message":"Analysis backend unavailable"}}"#,
    ))
}

/// In-memory document backend.
#[derive(Default)]
pub struct FakeDocumentApi {
    pub listing: Mutex<DocumentsResponse>,
    pub details: Mutex<HashMap<String, DocumentDetail>>,
    /// Returned by `upload_document`.
    pub uploaded: Mutex<Option<DocumentDetail>>,
    /// Percentages reported during `upload_document`.
    pub progress_steps: Mutex<Vec<u8>>,
    /// Called after each reported progress step.
    pub probe: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
    /// Operations (by trait method name) that fail with a server error.
    pub failing: Mutex<HashSet<&'static str>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeDocumentApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().remove(op);
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == op).count()
    }

    fn enter(&self, op: &'static str) -> Result<()> {
        self.calls.lock().push(op.to_string());
        if self.failing.lock().contains(op) {
            return Err(server_error());
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentApi for FakeDocumentApi {
    async fn upload_document(
        &self,
        _file: UploadFile,
        progress: Option<UploadProgress>,
    ) -> Result<DocumentDetail> {
        self.enter("upload_document")?;
        if let Some(report) = progress {
            let steps = self.progress_steps.lock().clone();
            for step in steps {
                report(step);
                if let Some(probe) = self.probe.lock().as_ref() {
                    probe();
                }
            }
        }
        self.uploaded
            .lock()
            .clone()
            .ok_or_else(|| ClientError::Api(ApiError::from_response(422, "")))
    }

    async fn get_documents(&self) -> Result<DocumentsResponse> {
        self.enter("get_documents")?;
        Ok(self.listing.lock().clone())
    }

    async fn get_document(&self, id: &str) -> Result<DocumentDetail> {
        self.enter("get_document")?;
        self.details.lock().get(id).cloned().ok_or_else(|| {
            ClientError::Api(ApiError::from_response(
                404,
                r#"{"detail":"Document not found"}"#,
            ))
        })
    }

    async fn delete_document(&self, id: &str) -> Result<DeleteResponse> {
        self.enter("delete_document")?;
        let mut listing = self.listing.lock();
        listing.documents.retain(|d| d.id != id);
        listing.total_count = listing.documents.len();
        Ok(DeleteResponse {
            success: true,
            message: format!("Document {} deleted", id),
        })
    }

    async fn get_suggested_questions(&self, _id: &str) -> Result<Vec<String>> {
        self.enter("get_suggested_questions")?;
        Ok(vec!["What is the notice period?".to_string()])
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot> {
        self.enter("get_analytics")?;
        Ok(AnalyticsSnapshot::empty())
    }

    async fn get_models_status(&self) -> Result<LegalModelsStatus> {
        self.enter("get_models_status")?;
        Ok(LegalModelsStatus {
            available_models: HashMap::new(),
            loaded_models: vec![],
            device: "cpu".to_string(),
            total_models: 0,
            status: ModelsState::Operational,
        })
    }

    async fn health(&self) -> Result<HealthResponse> {
        self.enter("health")?;
        Ok(HealthResponse {
            status: HealthState::Healthy,
            timestamp: String::new(),
            version: "8.0.0".to_string(),
            documents_processed: 0,
            components: None,
            metrics: None,
        })
    }

    async fn batch_upload(&self, _files: Vec<UploadFile>) -> Result<BatchUploadResponse> {
        self.enter("batch_upload")?;
        Err(ClientError::Api(ApiError::from_response(501, "")))
    }

    async fn compare_documents(&self, _ids: &[String]) -> Result<ComparisonResponse> {
        self.enter("compare_documents")?;
        Err(ClientError::Api(ApiError::from_response(501, "")))
    }
}

/// Scripted chat backend.
#[derive(Default)]
pub struct FakeChatApi {
    /// Answers handed out in order; an empty queue yields a generic answer.
    pub answers: Mutex<VecDeque<Result<QuestionResponse>>>,
    /// `None` makes `get_suggested_questions` fail.
    pub suggestions: Mutex<Option<Vec<String>>>,
    pub asked: Mutex<Vec<(String, String)>>,
    /// When set, `ask_question` waits for a permit before answering.
    pub gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeChatApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            suggestions: Mutex::new(Some(vec![
                "Who pays for repairs?".to_string(),
                "Is subletting allowed?".to_string(),
            ])),
            ..Default::default()
        })
    }

    pub fn push_answer(&self, answer: Result<QuestionResponse>) {
        self.answers.lock().push_back(answer);
    }

    pub fn hold(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&notify));
        notify
    }

    pub fn asked_count(&self) -> usize {
        self.asked.lock().len()
    }
}

#[async_trait]
impl ChatApi for FakeChatApi {
    async fn ask_question(&self, document_id: &str, question: &str) -> Result<QuestionResponse> {
        self.asked
            .lock()
            .push((document_id.to_string(), question.to_string()));

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let next = self.answers.lock().pop_front();
        next.unwrap_or_else(|| Ok(super::answer("Generic answer.", &[])))
    }

    async fn get_suggested_questions(&self, _document_id: &str) -> Result<Vec<String>> {
        self.suggestions.lock().clone().ok_or_else(server_error)
    }
}
