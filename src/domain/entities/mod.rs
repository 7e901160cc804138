//! # Domain Entities
//!
//! ビジネスエンティティ定義

pub mod summary_report;
pub mod uploaded_audio;
