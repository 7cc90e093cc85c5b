//! # lexplain - AI legal document review client
//!
//! Client core for the legal document explainer: users upload PDF contracts,
//! read the AI analysis, browse their documents, chat with an assistant about
//! one document at a time and look at collection-wide analytics. All analysis
//! happens on the backend; this crate is the transport, the state and the
//! view logic. The Leptos app in `ui/` renders it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lexplain::{ClientConfig, ClientContext};
//! use lexplain::types::UploadFile;
//!
//! let ctx = ClientContext::new(ClientConfig::from_env()?)?;
//!
//! let bytes = std::fs::read("lease.pdf")?;
//! if let Some(detail) = ctx.documents.upload_document(UploadFile::new("lease.pdf", bytes)).await {
//!     println!("{} -> {}", detail.filename, detail.risk_level().label());
//!
//!     ctx.chat.open_chat(&detail.id, &detail.filename).await;
//!     ctx.chat.send_message("Can I terminate this agreement early?").await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP transport plus document and chat services
//! - [`state`] - documents, chat and analytics containers
//! - [`views`] - filtering, sorting and formatting used by the pages
//! - [`report`] - PDF export of an analysis
//! - [`risk`] - the risk bucket function
//! - [`types`] - models and errors
//! - [`utils`] - configuration and log setup
//!
//! ## Architecture
//!
//! Services sit behind the [`DocumentApi`] and [`ChatApi`] traits so the
//! containers can be driven by fakes in tests. Containers are cloneable
//! handles; views subscribe to their revision channels instead of listening
//! for global events.

#![warn(rustdoc::missing_crate_level_docs)]

/// Backend transport and services.
pub mod api;
/// PDF export of document analyses.
pub mod report;
/// Risk buckets and labels.
pub mod risk;
/// State containers.
pub mod state;
/// Models and errors.
pub mod types;
/// Configuration and telemetry.
pub mod utils;
/// Framework-independent view logic.
pub mod views;

pub use api::{ApiClient, ChatApi, ChatService, DocumentApi, DocumentService};
pub use report::ExportedReport;
pub use risk::RiskLevel;
pub use state::{AnalyticsStore, ChatStore, DocumentsStore};
pub use types::{ApiError, ClientError, Result};
pub use utils::{ClientConfig, ConfigError};

use std::sync::Arc;

/// Everything the app shares between pages and the chat widget.
#[derive(Clone)]
pub struct ClientContext {
    pub config: Arc<ClientConfig>,
    pub document_service: Arc<DocumentService>,
    pub documents: DocumentsStore,
    pub chat: ChatStore,
    pub analytics: AnalyticsStore,
}

impl ClientContext {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let client = ApiClient::new(&config)?;
        let document_service = Arc::new(DocumentService::new(client.clone(), &config));
        let chat_service: Arc<dyn ChatApi> = Arc::new(ChatService::new(client));

        Ok(Self::with_services(config, document_service, chat_service))
    }

    /// Wire containers to the given services.
    pub fn with_services(
        config: ClientConfig,
        document_service: Arc<DocumentService>,
        chat_service: Arc<dyn ChatApi>,
    ) -> Self {
        let docs: Arc<dyn DocumentApi> = document_service.clone();
        Self {
            documents: DocumentsStore::new(Arc::clone(&docs)),
            analytics: AnalyticsStore::new(docs),
            chat: ChatStore::new(chat_service, config.chat_session_capacity),
            document_service,
            config: Arc::new(config),
        }
    }
}
