use base64::Engine as _;

const FALLBACK_MIME: &str = "image/jpeg";

/// Base64 image ready to inline into a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub base64: String,
}

impl ImageAttachment {
    pub fn new(mime_type: &str, base64: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            base64: base64.to_string(),
        }
    }

    /// Encodes raw bytes, sniffing the MIME type from the magic number.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mime_type = image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME);
        Self {
            mime_type: mime_type.to_string(),
            base64: base64::prelude::BASE64_STANDARD.encode(bytes),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic_is_detected() {
        let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        let attachment = ImageAttachment::from_bytes(&png_header);
        assert_eq!(attachment.mime_type, "image/png");
        assert!(attachment.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_bytes_fall_back_to_jpeg() {
        let attachment = ImageAttachment::from_bytes(b"ABC");
        assert_eq!(attachment.mime_type, "image/jpeg");
        assert_eq!(attachment.base64, "QUJD");
    }
}
