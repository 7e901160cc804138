//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::path::Path;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::gemini::client::{GeminiApi, RealGeminiClient};
use crate::adapter::repositories::gemini_media_repository::GeminiMediaRepository;
use crate::adapter::repositories::gemini_report_repository::GeminiReportRepository;
use crate::application::use_cases::summarize_audio::SummarizeAudioUseCase;
use crate::domain::entities::summary_report::SummaryReport;

use super::cli::Args;

/// Audio Report Workflow
///
/// 設定とクライアントからリポジトリとユースケースを組み立てる
pub struct AudioReportWorkflow<C: GeminiApi> {
    use_case: SummarizeAudioUseCase<GeminiMediaRepository<C>, GeminiReportRepository<C>>,
}

impl AudioReportWorkflow<RealGeminiClient> {
    /// Create a new workflow instance with the real Gemini client
    pub fn new(config: Config) -> Self {
        let client = RealGeminiClient::new(config.api_key.clone());
        Self::with_client(client, config)
    }
}

impl<C: GeminiApi> AudioReportWorkflow<C> {
    /// Create a workflow with an injected client (used by tests)
    pub fn with_client(client: C, config: Config) -> Self {
        let client = Arc::new(client);

        // Repository implementations
        let media_repo = Arc::new(GeminiMediaRepository::new(client.clone()));
        let report_repo = Arc::new(GeminiReportRepository::new(client, config.model));

        // Use Case construction
        let use_case = SummarizeAudioUseCase::new(media_repo, report_repo);

        Self { use_case }
    }

    /// Execute the summarize workflow
    ///
    /// # Errors
    ///
    /// アップロードまたは生成に失敗した場合にエラーを返す
    pub async fn execute(&self, args: &Args) -> Result<SummaryReport> {
        // チルダをホームディレクトリに展開してから渡す
        let input_path = shellexpand::tilde(&args.input).to_string();
        info!("Processing audio file: {}", input_path);

        self.use_case.execute(Path::new(&input_path)).await
    }
}
