use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// No response was received.
    Network,
    /// The server answered with a non-success status.
    Request { status: u16 },
    /// The request could not be prepared or its response could not be read.
    Client,
}

/// Uniform error shape surfaced by every backend call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn network() -> Self {
        Self {
            error: "Network error".to_string(),
            message: "Unable to connect to the server. Please check your connection.".to_string(),
            suggestion: None,
            accepted_types: None,
            reason: None,
            kind: ApiErrorKind::Network,
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self {
            error: "Client error".to_string(),
            message: message.into(),
            suggestion: None,
            accepted_types: None,
            reason: None,
            kind: ApiErrorKind::Client,
        }
    }

    /// Builds the error for a non-success response from its status and raw body.
    ///
    /// Accepted bodies: `{"detail": {...}}`, `{"detail": "text"}`,
    /// `{"error": .., "message": ..}`, or anything else (including empty).
    pub fn from_response(status: u16, body: &str) -> Self {
        let mut err = Self {
            error: "Request failed".to_string(),
            message: format!("Request failed with status {}", status),
            suggestion: None,
            accepted_types: None,
            reason: None,
            kind: ApiErrorKind::Request { status },
        };

        let Ok(Value::Object(root)) = serde_json::from_str::<Value>(body) else {
            return err;
        };

        let detail = match root.get("detail") {
            Some(Value::Object(detail)) => detail.clone(),
            Some(Value::String(text)) => {
                err.message = text.clone();
                return err;
            }
            _ => root,
        };

        if let Some(error) = detail.get("error").and_then(Value::as_str) {
            err.error = error.to_string();
        }
        if let Some(message) = detail.get("message").and_then(Value::as_str) {
            err.message = message.to_string();
        }
        err.suggestion = detail
            .get("suggestion")
            .and_then(Value::as_str)
            .map(str::to_string);
        err.reason = detail
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string);
        err.accepted_types = detail
            .get("accepted_types")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            });
        err
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Request { status } => Some(status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            tracing::warn!(error = %err, "request did not reach the server");
            Self::network()
        } else if let Some(status) = err.status() {
            Self::from_response(status.as_u16(), "")
        } else {
            Self::client(err.to_string())
        }
    }
}

/// Errors returned by services, state containers and report export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Validation(String),

    #[error("PDF export failed: {0}")]
    Export(String),
}

impl ClientError {
    /// The user-facing message, as shown in error banners.
    pub fn message(&self) -> String {
        match self {
            ClientError::Api(err) => err.message.clone(),
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Export(_) => self.to_string(),
        }
    }

    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<lexplain_pdf::Error> for ClientError {
    fn from(err: lexplain_pdf::Error) -> Self {
        ClientError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
