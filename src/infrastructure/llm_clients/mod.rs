pub mod openai;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::image::ImageAttachment;
use async_trait::async_trait;

pub use openai::OpenAIClient;

#[async_trait]
pub trait LLMClient {
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String>;

    /// Single user turn carrying a text part and an inlined image part.
    async fn generate_with_image(
        &self,
        config: &LLMConfig,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::LLMClient;
    use crate::domain::error::{AppError, Result};
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::image::ImageAttachment;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned-reply client that counts how often it was called.
    pub(crate) struct FakeClient {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl FakeClient {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn answer(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| AppError::LLMError("API error (500): boom".to_string()))
        }
    }

    #[async_trait]
    impl LLMClient for FakeClient {
        async fn generate(&self, _config: &LLMConfig, _system: &str, _user: &str) -> Result<String> {
            self.answer()
        }

        async fn generate_with_image(
            &self,
            _config: &LLMConfig,
            _prompt: &str,
            _image: &ImageAttachment,
        ) -> Result<String> {
            self.answer()
        }
    }
}
