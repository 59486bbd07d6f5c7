//! REST client for making requests to the extraction service

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::types::{
    AnalyticsResponse, Document, FullTextResponse, PdfEntry, Row, TableListResponse, TableStats,
    UploadResponse,
};

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or("/api")
}

/// Error type for backend requests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// The backend reports failures as `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The fetches one document aggregation depends on.
///
/// Futures are not `Send` on wasm, hence `?Send`. Implemented by
/// [`RestClient`] and by scripted doubles in tests.
#[async_trait(?Send)]
pub trait DocumentApi {
    /// Ordered list of table names extracted from the document.
    async fn table_names(&self, pdf_id: i64) -> Result<Vec<String>, ApiError>;

    /// All rows of one extracted table, in server order.
    async fn table_rows(&self, table: &str) -> Result<Vec<Row>, ApiError>;

    /// Per-column statistics for one extracted table.
    async fn table_analytics(&self, table: &str) -> Result<TableStats, ApiError>;

    /// Full document text.
    async fn full_text(&self, pdf_id: i64) -> Result<String, ApiError>;
}

/// REST client for the extraction backend
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the URL configured via [`init_api_url`]
    pub fn configured() -> Self {
        Self::new(get_api_url())
    }

    /// All uploaded documents, in server order.
    pub async fn documents(&self) -> Result<Vec<Document>, ApiError> {
        let entries: Vec<PdfEntry> = self.get_json("/pdf_ids").await?;
        Ok(entries
            .into_iter()
            .map(|entry| Document {
                id: entry.pdf_id,
                filename: entry.filename,
            })
            .collect())
    }

    /// Upload one PDF; the backend responds with the id it assigned.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<Document, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;
        let accepted: UploadResponse = Self::decode(response).await?;

        Ok(Document {
            id: accepted.pdf_id,
            filename: filename.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl DocumentApi for RestClient {
    async fn table_names(&self, pdf_id: i64) -> Result<Vec<String>, ApiError> {
        let response: TableListResponse = self.get_json(&format!("/pdf/{pdf_id}/tables")).await?;
        Ok(response.tables)
    }

    async fn table_rows(&self, table: &str) -> Result<Vec<Row>, ApiError> {
        self.get_json(&format!("/table/{table}")).await
    }

    async fn table_analytics(&self, table: &str) -> Result<TableStats, ApiError> {
        let response: AnalyticsResponse = self.get_json(&format!("/analytics/{table}")).await?;
        Ok(response.analytics)
    }

    async fn full_text(&self, pdf_id: i64) -> Result<String, ApiError> {
        let response: FullTextResponse = self.get_json(&format!("/text/{pdf_id}")).await?;
        Ok(response.full_text)
    }
}
