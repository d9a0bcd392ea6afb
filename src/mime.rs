//! Content-type sniffing for upload payloads.

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Sniffs the content type of an upload from its leading bytes.
pub fn detect_content_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x47, 0x49, 0x46, 0x38, ..] => "image/gif",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        [_, _, _, _, 0x66, 0x74, 0x79, 0x70, 0x71, 0x74, ..] => "video/quicktime",
        [_, _, _, _, 0x66, 0x74, 0x79, 0x70, ..] => "video/mp4",
        [0x1A, 0x45, 0xDF, 0xA3, ..] => "video/webm",
        _ => {
            tracing::debug!(
                "Unrecognized upload format (first 4 bytes: {:02X?}), sending as {}",
                &bytes[..bytes.len().min(4)],
                FALLBACK_CONTENT_TYPE
            );
            FALLBACK_CONTENT_TYPE
        }
    }
}

/// File extension Cloudinary would report as `format` for a content type.
pub fn format_for_content_type(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "video/quicktime" => "mov",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        assert_eq!(
            detect_content_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            "image/png"
        );
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(detect_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(detect_content_type(b"GIF89a"), "image/gif");
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            detect_content_type(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ]),
            "image/webp"
        );
    }

    #[test]
    fn test_detect_mp4_and_quicktime() {
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x18ftypmp42"),
            "video/mp4"
        );
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x14ftypqt  "),
            "video/quicktime"
        );
    }

    #[test]
    fn test_detect_webm() {
        assert_eq!(
            detect_content_type(&[0x1A, 0x45, 0xDF, 0xA3, 0x01]),
            "video/webm"
        );
    }

    #[test]
    fn test_unknown_and_empty_fall_back() {
        assert_eq!(
            detect_content_type(&[0x00, 0x01, 0x02, 0x03]),
            FALLBACK_CONTENT_TYPE
        );
        assert_eq!(detect_content_type(&[]), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn test_format_for_content_type() {
        assert_eq!(format_for_content_type("image/png"), "png");
        assert_eq!(format_for_content_type("video/mp4"), "mp4");
        assert_eq!(format_for_content_type(FALLBACK_CONTENT_TYPE), "bin");
    }
}
