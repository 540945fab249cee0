use crate::domain::error::{AppError, Result};

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Screenshot handed in alongside the description.
#[derive(Debug, Clone, Default)]
pub struct ScreenshotUpload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl ScreenshotUpload {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::ValidationError(format!(
                "Screenshot exceeds {} MB limit.",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        if let Some(name) = self.file_name.as_deref() {
            let extension = name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
                .unwrap_or_default();
            if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Unsupported screenshot type: {}",
                    name
                )));
            }
        }

        Ok(())
    }
}
