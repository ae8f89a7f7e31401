//! Data-URL encoding for uploaded media.
//!
//! The add-recipe form reads uploaded image/audio/video files into memory and
//! stores them inline as data-URLs, the same shape a browser `FileReader`
//! produces. The mime type is guessed from the file extension.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode file bytes as a `data:<mime>;base64,...` URL.
pub fn data_url(filename: &str, bytes: &[u8]) -> String {
    let mime = mime_for(filename);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_encoding() {
        assert_eq!(data_url("pic.png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(
            data_url("clip.MP3", b"abc"),
            "data:audio/mpeg;base64,YWJj"
        );
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert!(data_url("mystery.xyz", b"").starts_with("data:application/octet-stream;base64,"));
        assert!(data_url("no-extension", b"").starts_with("data:application/octet-stream;"));
    }
}
