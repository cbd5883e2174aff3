use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Isolation boundary for participants, results and command locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub points: u32,
}

impl Participant {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            points: 0,
        }
    }

    /// Markdown mention understood by the chat client.
    pub fn mention(&self) -> String {
        format!("[{}](tg://user?id={})", self.name, self.id)
    }
}

/// One stored draw. `winner` is a snapshot taken before the point was awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub date: String, // DD.MM.YYYY
    pub winner: Participant,
}

/// Author of an incoming chat command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub is_bot: bool,
}

impl Sender {
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    pub chat: ChatId,
    pub sender: Sender,
    pub text: String,
    /// Local wall-clock time the message was received.
    pub sent_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOptions {
    pub markdown: bool,
    pub silent: bool,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            markdown: true,
            silent: true,
        }
    }
}
