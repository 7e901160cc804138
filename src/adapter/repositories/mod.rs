//! Adapter Repositories
//!
//! Domain Repository traitのGemini実装

pub mod gemini_media_repository;
pub mod gemini_report_repository;
