//! Document operations against the analysis backend.

use super::client::{ApiClient, UploadProgress};
use crate::report::{self, ExportedReport};
use crate::types::{
    AnalyticsSnapshot, BatchUploadResponse, ClientError, CompareRequest, ComparisonResponse,
    DeleteResponse, DocumentDetail, DocumentsResponse, HealthResponse, LegalModelsStatus, Result,
    SuggestedQuestionsResponse, UploadFile,
};
use crate::utils::ClientConfig;
use async_trait::async_trait;
use tracing::{debug, info};

pub const PDF_EXTENSION: &str = ".pdf";

/// Backend operations on documents.
///
/// Implemented by [`DocumentService`] over HTTP and by fakes in tests.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DocumentApi: Send + Sync {
    /// Upload and analyze one PDF.
    async fn upload_document(
        &self,
        file: UploadFile,
        progress: Option<UploadProgress>,
    ) -> Result<DocumentDetail>;

    /// All documents plus collection aggregates.
    async fn get_documents(&self) -> Result<DocumentsResponse>;

    async fn get_document(&self, id: &str) -> Result<DocumentDetail>;

    async fn delete_document(&self, id: &str) -> Result<DeleteResponse>;

    async fn get_suggested_questions(&self, id: &str) -> Result<Vec<String>>;

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot>;

    async fn get_models_status(&self) -> Result<LegalModelsStatus>;

    async fn health(&self) -> Result<HealthResponse>;

    async fn batch_upload(&self, files: Vec<UploadFile>) -> Result<BatchUploadResponse>;

    async fn compare_documents(&self, ids: &[String]) -> Result<ComparisonResponse>;
}

/// Checks a picked file before anything is sent.
pub fn validate_file(file: &UploadFile, max_bytes: u64) -> Result<()> {
    if !file.name.to_ascii_lowercase().ends_with(PDF_EXTENSION) {
        return Err(ClientError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    if file.size() > max_bytes {
        return Err(ClientError::Validation(format!(
            "File size must be less than {}MB",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DocumentService {
    client: ApiClient,
    max_upload_bytes: u64,
}

impl DocumentService {
    pub fn new(client: ApiClient, config: &ClientConfig) -> Self {
        Self {
            client,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Render the analysis of `id` as a downloadable PDF.
    pub async fn export_report(&self, id: &str) -> Result<ExportedReport> {
        report::export_report(self, id).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DocumentApi for DocumentService {
    async fn upload_document(
        &self,
        file: UploadFile,
        progress: Option<UploadProgress>,
    ) -> Result<DocumentDetail> {
        validate_file(&file, self.max_upload_bytes)?;
        info!(filename = %file.name, bytes = file.size(), "uploading document");

        let detail: DocumentDetail = self
            .client
            .upload_file("/upload-document", file, progress)
            .await?;

        info!(id = %detail.id, risk = detail.risk_score, "document analyzed");
        Ok(detail)
    }

    async fn get_documents(&self) -> Result<DocumentsResponse> {
        let response: DocumentsResponse = self.client.get("/documents").await?;
        debug!(count = response.documents.len(), "fetched documents");
        Ok(response)
    }

    async fn get_document(&self, id: &str) -> Result<DocumentDetail> {
        Ok(self.client.get(&format!("/document/{}", id)).await?)
    }

    async fn delete_document(&self, id: &str) -> Result<DeleteResponse> {
        Ok(self.client.delete(&format!("/document/{}", id)).await?)
    }

    async fn get_suggested_questions(&self, id: &str) -> Result<Vec<String>> {
        let response: SuggestedQuestionsResponse = self
            .client
            .get(&format!("/suggest-questions/{}", id))
            .await?;
        Ok(response.questions)
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot> {
        Ok(self.client.get("/analytics").await?)
    }

    async fn get_models_status(&self) -> Result<LegalModelsStatus> {
        Ok(self.client.get("/legal-models/status").await?)
    }

    async fn health(&self) -> Result<HealthResponse> {
        Ok(self.client.get("/health").await?)
    }

    async fn batch_upload(&self, files: Vec<UploadFile>) -> Result<BatchUploadResponse> {
        if files.is_empty() {
            return Err(ClientError::Validation(
                "Select at least one file to upload".to_string(),
            ));
        }
        for file in &files {
            validate_file(file, self.max_upload_bytes)?;
        }

        info!(files = files.len(), "batch upload");
        Ok(self
            .client
            .upload("/batch-upload", "files", files, None)
            .await?)
    }

    async fn compare_documents(&self, ids: &[String]) -> Result<ComparisonResponse> {
        if ids.len() < 2 {
            return Err(ClientError::Validation(
                "Select at least two documents to compare".to_string(),
            ));
        }

        let request = CompareRequest {
            document_ids: ids.to_vec(),
        };
        Ok(self.client.post("/compare-documents", &request).await?)
    }
}
