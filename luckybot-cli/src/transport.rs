use async_trait::async_trait;
use luckybot_core::{ChatId, Result, SendOptions, Transport};
use luckybot_draw::FairRandom;
use std::path::Path;

/// Prints the conversation to stdout and rolls dice locally.
#[derive(Debug, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send_message(&self, chat: ChatId, text: &str, _options: SendOptions) -> Result<()> {
        println!("[{}] {}", chat, text);
        Ok(())
    }

    async fn send_media(
        &self,
        chat: ChatId,
        media: &Path,
        caption: &str,
        _options: SendOptions,
    ) -> Result<()> {
        println!("[{}] <{}> {}", chat, media.display(), caption);
        Ok(())
    }

    async fn send_roll(&self, chat: ChatId, emoji: &str, _options: SendOptions) -> Result<u8> {
        let face = FairRandom::new().roll_die();
        tracing::debug!("Rolled {} for chat {}: {}", emoji, chat, face);
        println!("[{}] {}", chat, emoji);
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rolls_are_die_faces() {
        let transport = ConsoleTransport::new();
        for _ in 0..50 {
            let face = transport
                .send_roll(ChatId(1), "🎲", SendOptions::default())
                .await
                .unwrap();
            assert!((1..=6).contains(&face));
        }
    }
}
