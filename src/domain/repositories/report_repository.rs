//! # Report Repository Trait
//!
//! レポート生成を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::summary_report::SummaryReport;
use crate::domain::entities::uploaded_audio::UploadedAudio;

/// レポートリポジトリ
///
/// アップロード済み音声から週次レポートを生成するリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レポートを生成する
    ///
    /// # Arguments
    ///
    /// * `prompt` - ユーザープロンプト（このプログラムでは常に空文字列）
    /// * `audio` - アップロード済み音声の参照
    ///
    /// # Returns
    ///
    /// 生成されたレポート
    ///
    /// # Errors
    ///
    /// 生成リクエストに失敗した場合にエラーを返す
    async fn generate_report(&self, prompt: &str, audio: &UploadedAudio) -> Result<SummaryReport>;
}
