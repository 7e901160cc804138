//! Adapter Layer
//!
//! 外部システム（Gemini API, プロセス環境）との統合

pub mod config;
pub mod gemini;
pub mod repositories;
