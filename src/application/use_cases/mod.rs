//! # Use Cases
//!
//! ユースケース定義

pub mod summarize_audio;
