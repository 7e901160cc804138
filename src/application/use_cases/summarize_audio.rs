//! # Summarize Audio Use Case
//!
//! 音声要約ユースケース

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::summary_report::SummaryReport;
use crate::domain::repositories::media_repository::MediaRepository;
use crate::domain::repositories::report_repository::ReportRepository;

/// 生成リクエストに常に添えるユーザープロンプト
///
/// 指示は全てシステムインストラクション側にあるため空文字列で固定
const USER_PROMPT: &str = "";

/// 音声要約ユースケース
///
/// 音声ファイルをアップロードし、1回の生成リクエストでレポートを得る。
/// リトライやバッチ処理は行わない。
pub struct SummarizeAudioUseCase<M: MediaRepository, R: ReportRepository> {
    media_repository: Arc<M>,
    report_repository: Arc<R>,
}

impl<M: MediaRepository, R: ReportRepository> SummarizeAudioUseCase<M, R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `media_repository` - メディアリポジトリ
    /// * `report_repository` - レポートリポジトリ
    pub fn new(media_repository: Arc<M>, report_repository: Arc<R>) -> Self {
        Self {
            media_repository,
            report_repository,
        }
    }

    /// 音声をアップロードしてレポートを生成
    ///
    /// # Arguments
    ///
    /// * `input_path` - ローカル音声ファイルのパス
    ///
    /// # Returns
    ///
    /// 生成されたレポート
    ///
    /// # Errors
    ///
    /// アップロードまたは生成に失敗した場合にエラーを返す
    pub async fn execute(&self, input_path: &Path) -> Result<SummaryReport> {
        let audio = self.media_repository.upload_audio(input_path).await?;
        info!("Uploaded audio: {}", audio.name);

        let report = self
            .report_repository
            .generate_report(USER_PROMPT, &audio)
            .await?;
        info!("Generated report: {} chars", report.text().len());

        Ok(report)
    }
}
