use crate::error::Result;
use crate::types::{ChatId, SendOptions};
use async_trait::async_trait;
use std::path::Path;

/// Outbound side of the chat platform.
///
/// Implementations report throttling as [`LuckyError::RateLimited`] so the
/// delivery layer can back off.
///
/// [`LuckyError::RateLimited`]: crate::LuckyError::RateLimited
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_message(&self, chat: ChatId, text: &str, options: SendOptions) -> Result<()>;

    async fn send_media(
        &self,
        chat: ChatId,
        media: &Path,
        caption: &str,
        options: SendOptions,
    ) -> Result<()>;

    /// Ask the platform for an animated roll and return the face it landed on (1..=6).
    async fn send_roll(&self, chat: ChatId, emoji: &str, options: SendOptions) -> Result<u8>;
}
