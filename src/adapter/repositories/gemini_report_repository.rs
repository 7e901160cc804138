//! Gemini Report Repository Implementation
//!
//! ReportRepositoryのGemini generateContent実装

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::gemini::client::GeminiApi;
use crate::adapter::gemini::models::{
    Content, GeminiApiError, GenerateContentRequest, Part, SystemInstruction,
};
use crate::domain::entities::summary_report::SummaryReport;
use crate::domain::entities::uploaded_audio::UploadedAudio;
use crate::domain::repositories::report_repository::ReportRepository;

/// 全リクエストに付与する固定のシステムインストラクション
///
/// ユーザーが編集する手段は提供しない
pub const SYSTEM_INSTRUCTION: &str = "The input prompt contains data where hospitals collect \
realtime audio or text, including, but not limited to, feedback from discharged patients. \
Your job is to auto-summarize concerns and generate a weekly action report for hospital \
admins with trends. Figure out who is the doctor and who is the patient from the audio \
itself. Do not generate any other prompts. There should be no way that in the output you \
reference yourself. It will simply be professional. By reading the output, one should not \
be able to differentiate it from just any other report. If there is no input from the user, \
just say no input, please try again.";

/// Gemini generateContentによるレポートリポジトリ
pub struct GeminiReportRepository<C: GeminiApi> {
    client: Arc<C>,
    model: String,
}

impl<C: GeminiApi> GeminiReportRepository<C> {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `client` - Gemini APIクライアント
    /// * `model` - 使用するモデルID
    pub fn new(client: Arc<C>, model: String) -> Self {
        Self { client, model }
    }

    /// プロンプトとファイル参照からリクエストを組み立てる
    ///
    /// コンテンツはプロンプトとファイル参照の2パートのみ
    fn build_request(prompt: &str, audio: &UploadedAudio) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(SYSTEM_INSTRUCTION)],
            },
            contents: vec![Content {
                parts: vec![
                    Part::text(prompt),
                    Part::file_data(&audio.mime_type, &audio.uri),
                ],
            }],
        }
    }
}

#[async_trait]
impl<C: GeminiApi> ReportRepository for GeminiReportRepository<C> {
    async fn generate_report(&self, prompt: &str, audio: &UploadedAudio) -> Result<SummaryReport> {
        let request = Self::build_request(prompt, audio);

        let response = self.client.generate_content(&self.model, &request).await?;

        let text = response.text().ok_or(GeminiApiError::EmptyResponse)?;

        Ok(SummaryReport::new(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::gemini::client::MockGeminiApi;
    use crate::adapter::gemini::models::{Candidate, GenerateContentResponse};

    fn test_audio() -> UploadedAudio {
        UploadedAudio::new(
            "files/abc".to_string(),
            "https://example.com/v1beta/files/abc".to_string(),
            "audio/mpeg".to_string(),
        )
    }

    fn text_response(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part::text(text)],
                },
            }],
        }
    }

    #[test]
    fn test_build_request_shape() {
        let request = GeminiReportRepository::<MockGeminiApi>::build_request("", &test_audio());

        assert_eq!(
            request.system_instruction.parts,
            vec![Part::text(SYSTEM_INSTRUCTION)]
        );
        assert_eq!(request.contents.len(), 1);

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2, "prompt and file reference only");
        assert_eq!(parts[0], Part::text(""));
        assert_eq!(
            parts[1],
            Part::file_data("audio/mpeg", "https://example.com/v1beta/files/abc")
        );
    }

    #[tokio::test]
    async fn test_generate_report_returns_text() {
        let mut mock = MockGeminiApi::new();
        mock.expect_generate_content()
            .withf(|model, request| {
                model == "gemini-2.0-flash-lite"
                    && request.contents[0].parts[0] == Part::text("")
                    && request.contents[0].parts[1].file_data.is_some()
                    && request.system_instruction.parts[0] == Part::text(SYSTEM_INSTRUCTION)
            })
            .times(1)
            .returning(|_, _| Ok(text_response("REPORT-X")));

        let repo =
            GeminiReportRepository::new(Arc::new(mock), "gemini-2.0-flash-lite".to_string());

        let report = repo.generate_report("", &test_audio()).await.unwrap();
        assert_eq!(report.text(), "REPORT-X");
    }

    #[tokio::test]
    async fn test_generate_report_empty_response_is_error() {
        let mut mock = MockGeminiApi::new();
        mock.expect_generate_content()
            .returning(|_, _| Ok(GenerateContentResponse { candidates: vec![] }));

        let repo =
            GeminiReportRepository::new(Arc::new(mock), "gemini-2.0-flash-lite".to_string());

        let result = repo.generate_report("", &test_audio()).await;
        assert!(result.is_err());
    }
}
