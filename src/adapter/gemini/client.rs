//! Gemini Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use super::mime::mime_type_for;
use super::models::{
    FileMetadata, FileUploadResponse, GeminiApiError, GenerateContentRequest,
    GenerateContentResponse,
};

/// Gemini APIのデフォルトエンドポイント
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Trait for Gemini API operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeminiApi: Send + Sync {
    /// Upload a local file and return its metadata
    async fn upload_file(&self, path: &Path) -> Result<FileMetadata>;

    /// Issue a single generateContent request
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// Real Gemini client implementing GeminiApi over the REST API
pub struct RealGeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl RealGeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// テスト用にエンドポイントを差し替える
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// 成功以外のステータスをGeminiApiErrorに変換
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GeminiApiError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

#[async_trait]
impl GeminiApi for RealGeminiClient {
    async fn upload_file(&self, path: &Path) -> Result<FileMetadata> {
        let mime_type = mime_type_for(path);
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read audio file: {}", path.display()))?;

        debug!(
            "Uploading {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            mime_type
        );

        let url = format!("{}/upload/v1beta/files?uploadType=media", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(bytes)
            .send()
            .await
            .context("File upload request failed")?;

        let response = Self::check_status(response).await?;
        let upload: FileUploadResponse = response
            .json()
            .await
            .context("Failed to parse file upload response")?;

        Ok(upload.file)
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        debug!("Requesting generation from {}", model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("Generation request failed")?;

        let response = Self::check_status(response).await?;
        let generated: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse generation response")?;

        Ok(generated)
    }
}
