//! # Media Repository Trait
//!
//! 音声ファイルのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::uploaded_audio::UploadedAudio;

/// メディアリポジトリ
///
/// ローカルの音声ファイルを外部サービスへアップロードするリポジトリ
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// 音声ファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `path` - ローカル音声ファイルのパス
    ///
    /// # Returns
    ///
    /// サービスが返したファイル参照
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはアップロードに失敗した場合にエラーを返す
    async fn upload_audio(&self, path: &Path) -> Result<UploadedAudio>;
}
