//! # Uploaded Audio Entity
//!
//! アップロード済み音声ファイルへの参照

/// アップロード済み音声
///
/// サービスがファイルを受理した後に返す不透明な参照。
/// 1回の生成リクエストの間だけ保持し、明示的な解放は行わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAudio {
    /// サービス側のリソース名（例: "files/abc-123"）
    pub name: String,
    /// 生成リクエストで参照するためのURI
    pub uri: String,
    /// アップロード時に申告したMIMEタイプ
    pub mime_type: String,
}

impl UploadedAudio {
    /// 新しい参照を作成
    pub fn new(name: String, uri: String, mime_type: String) -> Self {
        Self {
            name,
            uri,
            mime_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let audio = UploadedAudio::new(
            "files/abc-123".to_string(),
            "https://generativelanguage.googleapis.com/v1beta/files/abc-123".to_string(),
            "audio/mpeg".to_string(),
        );

        assert_eq!(audio.name, "files/abc-123");
        assert!(audio.uri.ends_with("files/abc-123"));
        assert_eq!(audio.mime_type, "audio/mpeg");
    }
}
