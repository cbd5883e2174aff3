use crate::error::Result;
use crate::game::GameVariant;
use async_trait::async_trait;
use luckybot_core::{ChatId, Courier, Transport};

/// Where a draw is played: the source of rolls and the audience for
/// announcements. Calls are made strictly one after another.
#[async_trait]
pub trait GameChannel: Send + Sync {
    /// Roll for one participant and return the face, 1..=6.
    async fn roll(&self, variant: GameVariant) -> Result<u8>;

    async fn announce(&self, text: &str) -> Result<()>;

    /// Pause after a participant's turn.
    async fn settle(&self) {}
}

/// Plays a draw in a chat through the paced courier.
pub struct ChatChannel<'a, T> {
    courier: &'a Courier<T>,
    chat: ChatId,
}

impl<'a, T: Transport> ChatChannel<'a, T> {
    pub fn new(courier: &'a Courier<T>, chat: ChatId) -> Self {
        Self { courier, chat }
    }
}

#[async_trait]
impl<'a, T: Transport> GameChannel for ChatChannel<'a, T> {
    async fn roll(&self, variant: GameVariant) -> Result<u8> {
        Ok(self.courier.roll(self.chat, variant.emoji()).await?)
    }

    async fn announce(&self, text: &str) -> Result<()> {
        Ok(self.courier.message(self.chat, text).await?)
    }

    async fn settle(&self) {
        tokio::time::sleep(self.courier.config().turn_delay()).await;
    }
}
