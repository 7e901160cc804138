//! Gemini API Integration
//!
//! Gemini REST APIとの統合

pub mod client;
pub mod mime;
pub mod models;
