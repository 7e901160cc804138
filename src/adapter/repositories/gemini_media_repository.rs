//! Gemini Media Repository Implementation
//!
//! MediaRepositoryのGemini Files API実装

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::gemini::client::GeminiApi;
use crate::domain::entities::uploaded_audio::UploadedAudio;
use crate::domain::repositories::media_repository::MediaRepository;

/// Gemini Files APIによるメディアリポジトリ
pub struct GeminiMediaRepository<C: GeminiApi> {
    client: Arc<C>,
}

impl<C: GeminiApi> GeminiMediaRepository<C> {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: GeminiApi> MediaRepository for GeminiMediaRepository<C> {
    async fn upload_audio(&self, path: &Path) -> Result<UploadedAudio> {
        let file = self.client.upload_file(path).await?;

        Ok(UploadedAudio::new(file.name, file.uri, file.mime_type))
    }
}
