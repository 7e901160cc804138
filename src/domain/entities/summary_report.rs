//! # Summary Report Entity
//!
//! 生成された週次レポート

/// 週次レポート
///
/// サービスが生成したテキスト。標準出力へ出力して破棄する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    text: String,
}

impl SummaryReport {
    /// 新しいレポートを作成
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// レポート本文
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let report = SummaryReport::new("Weekly action report".to_string());
        assert_eq!(report.text(), "Weekly action report");
    }

    #[test]
    fn test_empty_text_is_allowed() {
        // 本文の検証はこのプログラムの責務ではない
        let report = SummaryReport::new(String::new());
        assert_eq!(report.text(), "");
    }
}
