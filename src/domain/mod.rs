//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - Gemini APIやHTTPについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadedAudio, SummaryReportなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod repositories;
