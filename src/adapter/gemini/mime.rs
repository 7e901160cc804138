//! MIME Type Detection
//!
//! 拡張子からMIMEタイプを推定

use std::path::Path;

/// 拡張子から音声のMIMEタイプを推定する
///
/// 未知の拡張子は `application/octet-stream` として扱い、
/// 判定はサービス側に委ねる。
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aiff") | Some("aif") => "audio/aiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_audio_extensions() {
        assert_eq!(mime_type_for(Path::new("feedback.mp3")), "audio/mpeg");
        assert_eq!(mime_type_for(Path::new("/tmp/a/b.wav")), "audio/wav");
        assert_eq!(mime_type_for(Path::new("note.m4a")), "audio/mp4");
        assert_eq!(mime_type_for(Path::new("note.flac")), "audio/flac");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(mime_type_for(Path::new("FEEDBACK.MP3")), "audio/mpeg");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(
            mime_type_for(Path::new("feedback.xyz")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_type_for(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
