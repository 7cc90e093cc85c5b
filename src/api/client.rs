//! HTTP transport for the analysis backend.
//!
//! [`ApiClient`] owns the base URL and the underlying `reqwest::Client`, logs
//! every request and response, and normalizes every failure into an
//! [`ApiError`]. Callers above this layer never see `reqwest` errors.

use crate::types::{ApiError, UploadFile};
use crate::utils::ClientConfig;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Upload progress callback, called with whole percentages in `0..=100`.
pub type UploadProgress = Arc<dyn Fn(u8) + Send + Sync>;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Size of the body chunks used to report upload progress.
#[cfg(not(target_arch = "wasm32"))]
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Integer percentage of `sent` over `total`, rounded to nearest.
pub fn progress_percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (sent as f64 * 100.0 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        info!("[API] {} {}", method, path);
        // Per request so the browser fetch is aborted too
        self.http.request(method, url).timeout(self.timeout)
    }

    async fn send(&self, method: &Method, path: &str, builder: RequestBuilder) -> ApiResult<Response> {
        builder.send().await.map_err(|e| {
            error!("[API] {} {} failed: {}", method, path, e);
            ApiError::from(e)
        })
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        response: Response,
    ) -> ApiResult<T> {
        let status = response.status();
        debug!("[API] {} {} -> {}", method, path, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            error!("[API] {} {} error: {}", method, path, err);
            return Err(err);
        }

        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::client(format!("Failed to parse response: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.send(&method, path, builder).await?;
        self.decode(&method, path, response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let builder = self.request(Method::GET, path);
        self.execute(Method::GET, path, builder).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, builder).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.execute(Method::PUT, path, builder).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let builder = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, builder).await
    }

    /// Multipart upload of `files`, each under the form field `field`.
    ///
    /// Progress is reported as the body is streamed out. It never decreases
    /// and ends at 100 once the whole body has been handed to the connection.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        files: Vec<UploadFile>,
        progress: Option<UploadProgress>,
    ) -> ApiResult<T> {
        let total: u64 = files.iter().map(UploadFile::size).sum();
        let mut form = Form::new();
        let mut offset = 0u64;

        for file in files {
            let size = file.size();
            let part = file_part(file, offset, total, progress.clone())?;
            form = form.part(field.to_string(), part);
            offset += size;
        }

        let builder = self.request(Method::POST, path).multipart(form);
        let result = self.execute(Method::POST, path, builder).await;

        if let (Ok(_), Some(report)) = (&result, &progress) {
            report(100);
        }
        result
    }

    /// Convenience for a single `file` field upload.
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file: UploadFile,
        progress: Option<UploadProgress>,
    ) -> ApiResult<T> {
        self.upload(path, "file", vec![file], progress).await
    }

    /// `GET /health` reachability probe. Never fails.
    pub async fn health_check(&self) -> bool {
        let builder = self.request(Method::GET, "/health");
        match self.send(&Method::GET, "/health", builder).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn file_part(
    file: UploadFile,
    offset: u64,
    total: u64,
    progress: Option<UploadProgress>,
) -> ApiResult<Part> {
    use bytes::Bytes;
    use futures::stream::{self, StreamExt};

    let UploadFile { name, bytes } = file;
    let length = bytes.len();
    let data = Bytes::from(bytes);

    let chunks: Vec<Bytes> = (0..length)
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| data.slice(start..(start + UPLOAD_CHUNK_SIZE).min(length)))
        .collect();

    let mut sent = offset;
    let body = stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(report) = &progress {
            report(progress_percent(sent, total));
        }
        Ok::<_, std::io::Error>(chunk)
    });

    Part::stream_with_length(reqwest::Body::wrap_stream(body), length as u64)
        .file_name(name)
        .mime_str("application/pdf")
        .map_err(|e| ApiError::client(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn file_part(
    file: UploadFile,
    _offset: u64,
    _total: u64,
    _progress: Option<UploadProgress>,
) -> ApiResult<Part> {
    Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str("application/pdf")
        .map_err(|e| ApiError::client(e.to_string()))
}
