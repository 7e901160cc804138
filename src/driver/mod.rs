//! # Driver Layer (Presentation)
//!
//! CLIと依存性注入を提供
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::AudioReportWorkflow;
