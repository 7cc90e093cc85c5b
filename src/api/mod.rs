//! Backend access.
//!
//! - [`client`]: HTTP transport and error normalization
//! - [`documents`]: upload, listing, detail, delete, analytics, batch and compare
//! - [`chat`]: question answering and question validation
//!
//! ## Endpoints
//!
//! - `POST /upload-document` - multipart upload (`file` field)
//! - `POST /batch-upload` - multipart upload (`files` field, repeated)
//! - `GET /documents` - list with aggregates
//! - `GET /document/{id}` - full analysis
//! - `DELETE /document/{id}`
//! - `GET /suggest-questions/{id}`
//! - `POST /ask-question`
//! - `POST /compare-documents`
//! - `GET /analytics`
//! - `GET /legal-models/status`
//! - `GET /health`

/// HTTP transport
pub mod client;

/// Document service
pub mod documents;

/// Chat service
pub mod chat;

pub use chat::{ChatApi, ChatService};
pub use client::{ApiClient, UploadProgress};
pub use documents::{DocumentApi, DocumentService};
