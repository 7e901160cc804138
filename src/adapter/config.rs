//! Configuration
//!
//! プロセス環境からの設定読み込み

use anyhow::{bail, Result};

/// APIキーの環境変数名
pub const API_KEY_VAR: &str = "API_KEY";

/// APIキー未設定時の固定メッセージ
pub const MISSING_API_KEY_MESSAGE: &str = "Error: API_KEY environment variable not found";

/// 全リクエストで使用するモデルID
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// 実行時設定
///
/// 設定はAPIキーと固定のモデルIDのみ。キーは起動時に一度だけ読み込む。
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    /// プロセス環境から設定を読み込む
    ///
    /// # Errors
    ///
    /// `API_KEY` が未設定または空の場合にエラーを返す。
    /// ネットワークアクセスを試みる前に必ず呼び出すこと。
    pub fn from_env() -> Result<Self> {
        let api_key = match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => bail!("{}", MISSING_API_KEY_MESSAGE),
        };

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数はプロセス全体で共有されるため1つのテストにまとめる
    #[test]
    fn test_from_env() {
        std::env::remove_var(API_KEY_VAR);
        let result = Config::from_env();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), MISSING_API_KEY_MESSAGE);

        std::env::set_var(API_KEY_VAR, "");
        let result = Config::from_env();
        assert!(result.is_err(), "empty key must be rejected");

        std::env::set_var(API_KEY_VAR, "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, DEFAULT_MODEL);

        std::env::remove_var(API_KEY_VAR);
    }
}
