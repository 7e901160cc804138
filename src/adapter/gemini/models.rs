//! Gemini API Models
//!
//! リクエスト/レスポンスのデータ構造

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gemini API呼び出しの失敗
#[derive(Debug, Error)]
pub enum GeminiApiError {
    /// HTTPステータスが成功以外
    #[error("Gemini API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// レスポンスにテキストが含まれていない
    #[error("Gemini API response contained no text")]
    EmptyResponse,
}

/// アップロードAPIのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    pub file: FileMetadata,
}

/// アップロード済みファイルのメタデータ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub uri: String,
    pub mime_type: String,
}

/// generateContentリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
}

/// システムインストラクション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// コンテンツ（パートの列）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// コンテンツの1パート
///
/// テキストかファイル参照のどちらか一方のみを持つ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    /// テキストパートを作成
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            file_data: None,
        }
    }

    /// ファイル参照パートを作成
    pub fn file_data(mime_type: &str, file_uri: &str) -> Self {
        Self {
            text: None,
            file_data: Some(FileData {
                mime_type: mime_type.to_string(),
                file_uri: file_uri.to_string(),
            }),
        }
    }
}

/// ファイル参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub mime_type: String,
    pub file_uri: String,
}

/// generateContentレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// 生成候補
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// 最初の候補のテキストを取り出す
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
    }
}
